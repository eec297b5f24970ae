use mirador_core::{Rect, Surface, SurfaceId, SurfaceKind, SurfaceResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
};

/// A surface on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to the
/// OS. Win32 has no per-window numeric level attribute, so the stacking
/// level is synthesized from the window's z-order position at enumeration
/// time (see [`crate::enumerate`]) and carried here. Metadata (title,
/// frame, visibility) is queried from the OS lazily.
#[derive(Debug, Clone, Copy)]
pub struct WindowSurface {
    hwnd: HWND,
    level: i32,
    kind: SurfaceKind,
}

impl WindowSurface {
    /// Creates a surface from a raw `HWND` and its synthesized level.
    pub fn new(hwnd: HWND, level: i32, kind: SurfaceKind) -> Self {
        Self { hwnd, level, kind }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl Surface for WindowSurface {
    fn id(&self) -> SurfaceId {
        SurfaceId(self.hwnd.0 as usize)
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn title(&self) -> SurfaceResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn frame(&self) -> SurfaceResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect writes the window bounds into our RECT.
        unsafe { GetWindowRect(self.hwnd, &mut rect)? };

        Ok(Rect::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}
