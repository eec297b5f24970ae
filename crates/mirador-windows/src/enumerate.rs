use mirador_core::{SurfaceKind, SurfaceResult};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, FindWindowW, IsIconic, IsWindowVisible,
};
use windows::core::{BOOL, PCWSTR};

use crate::surface::WindowSurface;

/// Window class of the shell taskbar, the closest Win32 analogue of a
/// system status surface.
const TASKBAR_CLASS: &str = "Shell_TrayWnd";

/// Stacking level of the taskbar surface.
///
/// Application levels are synthesized from z-order, so they are bounded
/// by the window count. A sentinel far above that keeps the taskbar
/// front-most without a second enumeration pass: the window set belongs
/// to other processes and can change between two reads, so a level
/// derived from a fresh count could land below a window from the first
/// snapshot.
pub const STATUS_BAR_LEVEL: i32 = i32::MAX;

/// Enumerates all visible, non-minimized, top-level application windows,
/// with stacking levels synthesized from z-order.
///
/// This calls the Win32 `EnumWindows` API, which iterates over every
/// top-level window in front-to-back z-order and invokes a callback for
/// each one. We filter inside the callback to keep only "real"
/// application windows, then assign levels counting up from the back:
/// the back-most window gets level 0, the front-most the highest.
pub fn enumerate_surfaces() -> SurfaceResult<Vec<WindowSurface>> {
    let mut handles: Vec<HWND> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<HWND> to collect results. This is safe
    // because EnumWindows runs synchronously — the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut handles as *mut _ as isize),
        )?;
    }

    let count = handles.len();
    Ok(handles
        .into_iter()
        .enumerate()
        .map(|(i, hwnd)| {
            let level = (count - 1 - i) as i32;
            WindowSurface::new(hwnd, level, SurfaceKind::Application)
        })
        .collect())
}

/// Finds the shell taskbar and wraps it as the status bar surface, at
/// [`STATUS_BAR_LEVEL`]. Returns `None` when the shell is not running.
pub fn find_status_bar() -> Option<WindowSurface> {
    let class: Vec<u16> = TASKBAR_CLASS.encode_utf16().chain(Some(0)).collect();

    // SAFETY: FindWindowW looks up a window by class name; the buffer
    // stays alive across the call and is null-terminated.
    let hwnd = unsafe { FindWindowW(PCWSTR(class.as_ptr()), PCWSTR::null()) }.ok()?;

    Some(WindowSurface::new(hwnd, STATUS_BAR_LEVEL, SurfaceKind::StatusBar))
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop.
///
/// # How Win32 callbacks work
///
/// Win32 can't call Rust closures directly. Instead, we use `extern
/// "system"` (the Windows calling convention) and pass data through an
/// `LPARAM` — a pointer-sized integer used as "user data". We cast our
/// `Vec<HWND>` pointer into an `LPARAM` when calling `EnumWindows`, and
/// cast it back here.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<HWND>, cast from
    // enumerate_surfaces().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };

    if should_include_window(hwnd) {
        handles.push(hwnd);
    }

    BOOL(1) // TRUE — continue enumerating
}

/// Determines whether a window should be included in the enumeration.
///
/// Filters out invisible, minimized, and non-application windows.
fn should_include_window(hwnd: HWND) -> bool {
    // SAFETY: These are simple query functions that read window state.
    unsafe {
        if !IsWindowVisible(hwnd).as_bool() {
            return false;
        }
        if IsIconic(hwnd).as_bool() {
            return false;
        }
    }

    is_app_window(hwnd)
}

/// Returns whether this looks like a real application window.
///
/// Checks for a caption bar (`WS_CAPTION`) and rejects tool windows
/// (`WS_EX_TOOLWINDOW`). This filters out internal helper windows,
/// tooltips, floating toolbars, and other non-application surfaces that a
/// hierarchy traversal should never start from.
fn is_app_window(hwnd: HWND) -> bool {
    use windows::Win32::UI::WindowsAndMessaging::{
        GWL_EXSTYLE, GWL_STYLE, GetWindowLongPtrW, WS_CAPTION, WS_EX_TOOLWINDOW,
    };

    unsafe {
        let style = GetWindowLongPtrW(hwnd, GWL_STYLE) as u32;
        let ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32;

        let has_caption = (style & WS_CAPTION.0) == WS_CAPTION.0;
        let is_tool = (ex_style & WS_EX_TOOLWINDOW.0) == WS_EX_TOOLWINDOW.0;

        has_caption && !is_tool
    }
}
