//! Scoped ownership of page-level browser state used by overlay widgets.
//!
//! Every resource handed out here is a guard: dropping it releases the
//! resource, so widgets only need to drop guards on close and on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{ev, logging, provide_context, use_context, window_event_listener};

use crate::UiError;

const OVERFLOW: &str = "overflow";
const LOCKED_OVERFLOW: &str = "hidden";

/// Read/write access to the scrollable root's inline `overflow` style.
pub trait ScrollHost {
    /// Current inline `overflow` value (empty when unset).
    fn overflow(&self) -> Result<String, UiError>;
    /// Writes the inline `overflow` value; an empty value removes it.
    fn set_overflow(&self, value: &str) -> Result<(), UiError>;
}

/// The document `<body>` element.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentBody;

fn document_body() -> Result<web_sys::HtmlElement, UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;
    document.body().ok_or(UiError::MissingBody)
}

impl ScrollHost for DocumentBody {
    fn overflow(&self) -> Result<String, UiError> {
        document_body()?
            .style()
            .get_property_value(OVERFLOW)
            .map_err(|err| UiError::style(OVERFLOW, err))
    }

    fn set_overflow(&self, value: &str) -> Result<(), UiError> {
        let style = document_body()?.style();
        let result = if value.is_empty() {
            style.remove_property(OVERFLOW).map(|_| ())
        } else {
            style.set_property(OVERFLOW, value)
        };
        result.map_err(|err| UiError::style(OVERFLOW, err))
    }
}

#[derive(Debug, Default)]
struct LockState {
    holders: usize,
    restore: Option<String>,
}

/// Reference-counted scroll suppression for one [`ScrollHost`].
///
/// The first holder records the host's previous `overflow` and sets it to
/// `hidden`; the last holder to release restores the recorded value.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    state: RefCell<LockState>,
}

impl<H: ScrollHost> ScrollLock<H> {
    /// Wraps `host` in an unlocked registry.
    pub fn new(host: H) -> Rc<Self> {
        Rc::new(Self {
            host,
            state: RefCell::new(LockState::default()),
        })
    }

    /// Takes a hold on the lock, suppressing scroll if this is the first hold.
    pub fn acquire(self: &Rc<Self>) -> Result<ScrollLockGuard<H>, UiError> {
        let mut state = self.state.borrow_mut();
        if state.holders == 0 {
            let previous = self.host.overflow()?;
            self.host.set_overflow(LOCKED_OVERFLOW)?;
            state.restore = Some(previous);
        }
        state.holders += 1;
        Ok(ScrollLockGuard {
            lock: Rc::clone(self),
        })
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }

    /// Whether scroll is currently suppressed.
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    fn release(&self) {
        let mut state = self.state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders > 0 {
            return;
        }
        let previous = state.restore.take().unwrap_or_default();
        if let Err(err) = self.host.set_overflow(&previous) {
            logging::warn!("scroll lock release failed: {err}");
        }
    }
}

/// One hold on a [`ScrollLock`]; released on drop.
pub struct ScrollLockGuard<H: ScrollHost> {
    lock: Rc<ScrollLock<H>>,
}

impl<H: ScrollHost> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

impl ScrollHost for Box<dyn ScrollHost> {
    fn overflow(&self) -> Result<String, UiError> {
        (**self).overflow()
    }

    fn set_overflow(&self, value: &str) -> Result<(), UiError> {
        (**self).set_overflow(value)
    }
}

/// Scroll lock over any host, as handed to overlay widgets.
pub type SharedScrollLock = Rc<ScrollLock<Box<dyn ScrollHost>>>;

thread_local! {
    static BODY_SCROLL_LOCK: SharedScrollLock = {
        let body: Box<dyn ScrollHost> = Box::new(DocumentBody);
        ScrollLock::new(body)
    };
}

/// Page-wide lock over the document `<body>`.
pub fn body_scroll_lock() -> SharedScrollLock {
    BODY_SCROLL_LOCK.with(Rc::clone)
}

#[derive(Clone)]
struct ScrollLockContext(SharedScrollLock);

/// Makes overlays below the current owner lock `lock` instead of the page body.
pub fn provide_scroll_lock(lock: SharedScrollLock) {
    provide_context(ScrollLockContext(lock));
}

/// The nearest provided lock, or [`body_scroll_lock`].
pub fn use_scroll_lock() -> SharedScrollLock {
    use_context::<ScrollLockContext>()
        .map(|ScrollLockContext(lock)| lock)
        .unwrap_or_else(body_scroll_lock)
}

/// Window-level `keydown` listener filtered to one key; removed on drop.
pub struct KeyListener {
    handle: Option<WindowListenerHandle>,
}

impl KeyListener {
    /// Calls `handler` for every `keydown` whose `key` equals `key`.
    pub fn on_key(key: &'static str, handler: impl Fn(web_sys::KeyboardEvent) + 'static) -> Self {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == key {
                handler(ev);
            }
        });
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ScrollHost;
    use crate::UiError;

    /// In-memory host that records every overflow write.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryHost {
        pub(crate) overflow: Rc<RefCell<String>>,
        pub(crate) writes: Rc<RefCell<Vec<String>>>,
    }

    impl MemoryHost {
        pub(crate) fn with_overflow(value: &str) -> Self {
            let host = Self::default();
            *host.overflow.borrow_mut() = value.to_string();
            host
        }

        pub(crate) fn current(&self) -> String {
            self.overflow.borrow().clone()
        }

        /// A shared lock over a clone of this host.
        pub(crate) fn shared_lock(&self) -> super::SharedScrollLock {
            let host: Box<dyn ScrollHost> = Box::new(self.clone());
            super::ScrollLock::new(host)
        }
    }

    impl ScrollHost for MemoryHost {
        fn overflow(&self) -> Result<String, UiError> {
            Ok(self.current())
        }

        fn set_overflow(&self, value: &str) -> Result<(), UiError> {
            *self.overflow.borrow_mut() = value.to_string();
            self.writes.borrow_mut().push(value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::testing::MemoryHost;
    use super::*;

    struct BrokenHost;

    impl ScrollHost for BrokenHost {
        fn overflow(&self) -> Result<String, UiError> {
            Err(UiError::MissingBody)
        }

        fn set_overflow(&self, _value: &str) -> Result<(), UiError> {
            Err(UiError::MissingBody)
        }
    }

    #[test]
    fn guard_locks_and_restores_on_drop() {
        let host = MemoryHost::default();
        let lock = ScrollLock::new(host.clone());

        let guard = lock.acquire().expect("acquire");
        assert!(lock.is_locked());
        assert_eq!(host.current(), "hidden");

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(host.current(), "");
    }

    #[test]
    fn restores_previous_inline_value() {
        let host = MemoryHost::with_overflow("auto");
        let lock = ScrollLock::new(host.clone());

        drop(lock.acquire().expect("acquire"));
        assert_eq!(host.current(), "auto");
    }

    #[test]
    fn nested_holders_release_only_on_last_drop() {
        let host = MemoryHost::default();
        let lock = ScrollLock::new(host.clone());

        let outer = lock.acquire().expect("outer");
        let inner = lock.acquire().expect("inner");
        assert_eq!(lock.holders(), 2);
        assert_eq!(host.writes.borrow().len(), 1);

        drop(inner);
        assert_eq!(host.current(), "hidden");
        assert!(lock.is_locked());

        drop(outer);
        assert_eq!(host.current(), "");
        assert_eq!(*host.writes.borrow(), vec!["hidden".to_string(), String::new()]);
    }

    #[test]
    fn failed_acquire_leaves_lock_released() {
        let lock = ScrollLock::new(BrokenHost);
        assert!(matches!(lock.acquire(), Err(UiError::MissingBody)));
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn boxed_host_delegates_reads_and_writes() {
        let host = MemoryHost::with_overflow("clip");
        let lock = host.shared_lock();

        let guard = lock.acquire().expect("acquire");
        assert_eq!(host.current(), "hidden");
        drop(guard);
        assert_eq!(host.current(), "clip");
    }

    #[test]
    fn provided_lock_replaces_page_body() {
        let _ = leptos::create_runtime();
        let host = MemoryHost::default();
        let provided = host.shared_lock();

        let resolve = leptos::as_child_of_current_owner(|lock: SharedScrollLock| {
            provide_scroll_lock(lock);
            use_scroll_lock()
        });
        let (resolved, _disposer) = resolve(Rc::clone(&provided));

        assert!(Rc::ptr_eq(&resolved, &provided));
        assert!(!Rc::ptr_eq(&resolved, &body_scroll_lock()));
    }

    #[test]
    fn relocking_after_full_release_records_fresh_value() {
        let host = MemoryHost::default();
        let lock = ScrollLock::new(host.clone());

        drop(lock.acquire().expect("first"));
        host.set_overflow("scroll").expect("write");
        let guard = lock.acquire().expect("second");
        drop(guard);
        assert_eq!(host.current(), "scroll");
    }
}
