//! Main application window
//!
//! Registers the window class, creates the single top-level window and runs
//! the message loop. Window messages are decoded into `InputEvent`s and fed
//! to the `AppController`; the returned `Effect` decides whether to redraw,
//! swap the background brush or quit.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::c_void;

use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{HDC, InvalidateRect, UpdateWindow};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, VK_CONTROL, VK_SHIFT};
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::{PCWSTR, w};

use crate::app::{AppController, Effect};
use crate::input::mouse::{high_word_signed, split_coords};
use crate::input::{
    HitZone, InputEvent, KeyModifiers, MouseButton, WheelDirection, translate_char,
    translate_key_down,
};
use crate::platform::gdi::{BackgroundBrush, PaintSession};
use crate::platform::windows::{rect_to_win32_rect, to_wstring, win32_rect_to_rect};
use crate::ui::renderer::{SceneLayout, SceneRenderer, pixmap_to_bgra};

const CLASS_NAME: PCWSTR = w!("GridMarksWindowClass");
const WINDOW_TITLE: PCWSTR = w!("Grid Marks");
const WINDOW_X: i32 = 100;
const WINDOW_Y: i32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to register window class!")]
    ClassRegistrationFailed,

    #[error("Failed to create window!")]
    WindowCreationFailed,

    #[error("Windows API error: {0}")]
    Win32(#[from] windows::core::Error),
}

/// Per-window data reachable from the window procedure
struct WindowContext {
    controller: AppController,
    renderer: SceneRenderer,
    brush: Option<BackgroundBrush>,
}

impl WindowContext {
    fn dispatch(&mut self, hwnd: HWND, event: InputEvent) {
        match self.controller.handle(event) {
            Effect::None => {}
            Effect::Redraw => invalidate(hwnd),
            Effect::RepaintBackground => {
                self.replace_brush();
                invalidate(hwnd);
            }
            Effect::Quit => unsafe { PostQuitMessage(0) },
        }
    }

    fn replace_brush(&mut self) {
        let color = self.controller.settings().current_bg_color;
        match BackgroundBrush::new(color) {
            Ok(brush) => self.brush = Some(brush),
            Err(err) => tracing::error!("{err}"),
        }
    }

    fn erase_background(&self, hwnd: HWND, hdc: HDC) -> bool {
        let Some(brush) = &self.brush else {
            return false;
        };

        let Some(client) = client_rect(hwnd) else {
            return false;
        };

        brush.fill(hdc, &client);
        true
    }

    /// Renders the current state into an open paint cycle. Any failure
    /// aborts this paint only; the cycle is still closed by the session.
    fn paint(&self, hwnd: HWND, session: &PaintSession) {
        let Some(client) = client_rect(hwnd) else {
            tracing::error!("Failed to query client area for painting");
            return;
        };

        let width = (client.right - client.left).max(0) as u32;
        let height = (client.bottom - client.top).max(0) as u32;
        let layout = SceneLayout::from_state(self.controller.state(), width, height);

        let pixmap = match self.renderer.render(&layout) {
            Ok(pixmap) => pixmap,
            Err(err) => {
                tracing::error!("{err}");
                return;
            }
        };

        let pixels = pixmap_to_bgra(&pixmap);
        if let Err(err) = session.blit_bgra(pixmap.width(), pixmap.height(), &pixels) {
            tracing::error!("{err}");
        }
    }
}

pub struct MainWindow;

impl MainWindow {
    /// Creates the window and pumps messages until quit.
    ///
    /// Returns the controller (for saving its settings) together with the
    /// exit code carried by `WM_QUIT`.
    pub fn run(controller: AppController) -> Result<(AppController, i32), WindowError> {
        let (hwnd, context) = create_window(controller)?;

        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOWNORMAL);
            let _ = UpdateWindow(hwnd);
        }

        let exit_code = run_message_loop();
        Ok((destroy_window(hwnd, context), exit_code))
    }
}

/// Registers the class and creates the window, handing it ownership of a
/// freshly allocated `WindowContext`
fn create_window(controller: AppController) -> Result<(HWND, *mut WindowContext), WindowError> {
    let module = unsafe { GetModuleHandleW(None)? };
    let instance: HINSTANCE = module.into();
    register_window_class(instance)?;

    let settings = controller.settings();
    let (width, height) = (settings.window_width, settings.window_height);
    let brush = match BackgroundBrush::new(settings.current_bg_color) {
        Ok(brush) => Some(brush),
        Err(err) => {
            tracing::error!("{err}");
            None
        }
    };

    let context = Box::into_raw(Box::new(WindowContext {
        controller,
        renderer: SceneRenderer::new(),
        brush,
    }));

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            CLASS_NAME,
            WINDOW_TITLE,
            WS_OVERLAPPED | WS_SYSMENU | WS_CAPTION | WS_MINIMIZEBOX | WS_THICKFRAME,
            WINDOW_X,
            WINDOW_Y,
            width,
            height,
            None,
            None,
            instance,
            Some(context as *const c_void),
        )
    };

    if hwnd.0 == 0 {
        drop(unsafe { Box::from_raw(context) });
        return Err(WindowError::WindowCreationFailed);
    }

    tracing::info!(width, height, "Window created");
    Ok((hwnd, context))
}

/// Detaches the context from the window, destroys the window and returns
/// the controller
fn destroy_window(hwnd: HWND, context: *mut WindowContext) -> AppController {
    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
        let _ = DestroyWindow(hwnd);
    }

    let context = unsafe { Box::from_raw(context) };
    context.controller
}

/// Shows a blocking error dialog, used when the window cannot be created
pub fn show_error_dialog(message: &str) {
    let wide = to_wstring(message);
    unsafe {
        let _ = MessageBoxW(HWND(0), PCWSTR(wide.as_ptr()), w!("Error"), MB_OK | MB_ICONERROR);
    }
}

fn register_window_class(instance: HINSTANCE) -> Result<(), WindowError> {
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default();

    let window_class = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(window_proc),
        hInstance: instance,
        hCursor: cursor,
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };

    if unsafe { RegisterClassExW(&window_class) } == 0 {
        return Err(WindowError::ClassRegistrationFailed);
    }

    Ok(())
}

fn run_message_loop() -> i32 {
    let mut msg = MSG::default();

    loop {
        let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };

        if result.0 == 0 {
            // WM_QUIT received
            return msg.wParam.0 as i32;
        } else if result.0 == -1 {
            tracing::error!("GetMessageW failed, leaving message loop");
            return 1;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

fn invalidate(hwnd: HWND) {
    unsafe {
        let _ = InvalidateRect(hwnd, None, true);
    }
}

fn client_rect(hwnd: HWND) -> Option<RECT> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd, &mut rect) }.ok()?;
    Some(rect)
}

fn current_modifiers() -> KeyModifiers {
    let is_down = |vk: i32| unsafe { (GetKeyState(vk) as u16 & 0x8000) != 0 };
    KeyModifiers {
        shift: is_down(VK_SHIFT.0 as i32),
        ctrl: is_down(VK_CONTROL.0 as i32),
    }
}

unsafe fn context_ptr(hwnd: HWND) -> *mut WindowContext {
    GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowContext
}

unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_NCCREATE {
        let create = &*(lparam.0 as *const CREATESTRUCTW);
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, create.lpCreateParams as isize);
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    let ptr = context_ptr(hwnd);
    if ptr.is_null() {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    // BeginPaint sends WM_ERASEBKGND synchronously, so no context borrow may
    // be alive while it runs
    match msg {
        WM_PAINT => {
            match PaintSession::begin(hwnd) {
                Ok(session) => (*ptr).paint(hwnd, &session),
                Err(err) => tracing::error!("{err}"),
            }
            return LRESULT(0);
        }
        WM_ERASEBKGND => {
            return if (*ptr).erase_background(hwnd, HDC(wparam.0 as isize)) {
                LRESULT(1)
            } else {
                DefWindowProcW(hwnd, msg, wparam, lparam)
            };
        }
        _ => {}
    }

    let context = &mut *ptr;
    match msg {
        WM_CLOSE => {
            context.dispatch(hwnd, InputEvent::Quit);
            LRESULT(0)
        }
        WM_KEYDOWN => {
            if let Some(event) = translate_key_down(wparam.0 as u32, current_modifiers()) {
                context.dispatch(hwnd, event);
            }
            LRESULT(0)
        }
        WM_CHAR => {
            if let Some(event) = translate_char(wparam.0 as u32) {
                context.dispatch(hwnd, event);
            }
            LRESULT(0)
        }
        WM_MOUSEWHEEL => {
            let direction = WheelDirection::from_delta(high_word_signed(wparam.0));
            context.dispatch(hwnd, InputEvent::Wheel(direction));
            LRESULT(0)
        }
        WM_LBUTTONDOWN | WM_RBUTTONDOWN => {
            let button = if msg == WM_LBUTTONDOWN { MouseButton::Left } else { MouseButton::Right };
            let (x, y) = split_coords(lparam.0);
            context.dispatch(hwnd, InputEvent::Click { button, x, y });
            LRESULT(0)
        }
        WM_SIZE => {
            let (width, height) = split_coords(lparam.0);
            context.dispatch(hwnd, InputEvent::Resize { width, height });
            LRESULT(0)
        }
        WM_SIZING => {
            let rect = &mut *(lparam.0 as *mut RECT);
            let constrained = context
                .controller
                .state()
                .constrain_sizing(win32_rect_to_rect(rect));
            *rect = rect_to_win32_rect(&constrained);
            LRESULT(1)
        }
        WM_NCHITTEST => {
            let hit = DefWindowProcW(hwnd, msg, wparam, lparam);
            LRESULT(HitZone::from_code(hit.0).restrict_to_bottom_edge().code())
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
