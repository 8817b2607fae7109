//! Result presentation for GUI mode.
//!
//! One presenter per target platform, chosen at compile time; every
//! platform degrades to plain console output when no dialog mechanism
//! is available.

/// Shows a titled message to the user.
pub trait Presenter {
    fn present(&self, title: &str, message: &str);
}

/// Last-resort renderer: print the dialog content to stdout.
pub struct ConsoleFallback;

impl Presenter for ConsoleFallback {
    fn present(&self, title: &str, message: &str) {
        println!("\n=== {title} ===\n{message}");
    }
}

#[cfg(target_os = "windows")]
pub fn presenter() -> Box<dyn Presenter> {
    Box::new(windows::MessageBox)
}

#[cfg(target_os = "macos")]
pub fn presenter() -> Box<dyn Presenter> {
    Box::new(macos::AppleScriptDialog)
}

#[cfg(target_os = "linux")]
pub fn presenter() -> Box<dyn Presenter> {
    Box::new(linux::DialogProbe)
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
pub fn presenter() -> Box<dyn Presenter> {
    Box::new(ConsoleFallback)
}

#[cfg(target_os = "windows")]
mod windows {
    use super::Presenter;
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use winapi::um::winuser::{MessageBoxW, MB_ICONINFORMATION, MB_OK};

    /// Native message box, no owner window.
    pub struct MessageBox;

    fn wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    impl Presenter for MessageBox {
        fn present(&self, title: &str, message: &str) {
            let text = wide(message);
            let caption = wide(title);
            unsafe {
                MessageBoxW(
                    std::ptr::null_mut(),
                    text.as_ptr(),
                    caption.as_ptr(),
                    MB_OK | MB_ICONINFORMATION,
                );
            }
        }
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use super::{ConsoleFallback, Presenter};
    use std::process::Command;

    pub struct AppleScriptDialog;

    impl Presenter for AppleScriptDialog {
        fn present(&self, title: &str, message: &str) {
            let script = format!(
                r#"display dialog {message:?} with title {title:?} buttons {{"OK"}} default button "OK""#
            );
            let shown = Command::new("osascript")
                .args(["-e", &script])
                .status()
                .map(|status| status.success())
                .unwrap_or(false);
            if !shown {
                ConsoleFallback.present(title, message);
            }
        }
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use super::{ConsoleFallback, Presenter};
    use std::process::Command;

    /// Tries the common dialog utilities in order and stops at the
    /// first one that runs successfully.
    pub struct DialogProbe;

    impl Presenter for DialogProbe {
        fn present(&self, title: &str, message: &str) {
            let candidates: [(&str, Vec<&str>); 3] = [
                ("zenity", vec!["--info", "--title", title, "--text", message]),
                ("kdialog", vec!["--msgbox", message, "--title", title]),
                ("xmessage", vec!["-title", title, message]),
            ];

            for (program, args) in candidates {
                match Command::new(program).args(&args).status() {
                    Ok(status) if status.success() => return,
                    Ok(status) => log::debug!("{program} exited with {status}"),
                    Err(err) => log::debug!("{program} unavailable: {err}"),
                }
            }
            ConsoleFallback.present(title, message);
        }
    }
}
