use addrbook::api::SharedBook;
use addrbook::error::Result;
use addrbook::store::DataStore;
use std::io::{self, Write};
#[cfg(unix)]
use std::thread;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;
#[cfg(unix)]
use tracing::{error, info};

pub(super) const INTERRUPT_MESSAGE: &str = "Data was saved successfully. Exiting the program...";

/// Saves the shared book and announces it.
#[cfg_attr(not(unix), allow(dead_code))]
pub(super) fn flush_on_interrupt<S, W>(book: &SharedBook, store: &mut S, out: &mut W) -> Result<()>
where
    S: DataStore,
    W: Write,
{
    let book = book.lock();
    store.save(&book)?;
    writeln!(out, "\n{}", INTERRUPT_MESSAGE)?;
    out.flush()?;
    Ok(())
}

/// Flushes the book and exits when the process is interrupted.
pub(super) struct InterruptWatcher {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    #[cfg(unix)]
    thread: thread::JoinHandle<()>,
}

impl InterruptWatcher {
    pub(super) fn start<S>(book: SharedBook, store: S) -> io::Result<Option<Self>>
    where
        S: DataStore + Send + 'static,
    {
        #[cfg(unix)]
        {
            let mut store = store;
            let mut signals = Signals::new([SIGINT, SIGTERM])?;
            let handle = signals.handle();
            let thread = thread::spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    info!(signal, "Interrupted, saving contacts");
                    match flush_on_interrupt(&book, &mut store, &mut io::stdout()) {
                        Ok(()) => std::process::exit(0),
                        Err(e) => {
                            error!("Failed to save contacts on interrupt: {}", e);
                            eprintln!("Error: {}", e);
                            std::process::exit(1);
                        }
                    }
                }
            });
            Ok(Some(Self { handle, thread }))
        }

        #[cfg(not(unix))]
        {
            let _ = book;
            let _ = store;
            Ok(None)
        }
    }

    pub(super) fn stop(self) {
        #[cfg(unix)]
        {
            self.handle.close();
            let _ = self.thread.join();
        }
    }
}
