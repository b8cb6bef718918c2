use std::io;

/// Something that can show a URL to the user, normally a web browser tab.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The user's default browser, via the `webbrowser` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}
