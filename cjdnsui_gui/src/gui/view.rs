//! The window: status and settings panels in tabs, telling observers when the user wants to save.
//!
//! # Example
//!
//! ```no_run
//! use cjdnsui_gui::{View, Topic};
//!
//! let view = View::new();
//! let weak = view.downgrade();
//! view.add_observer(Topic::SettingsSave, move |_event| {
//!     if let Some(view) = weak.upgrade() {
//!         println!("Save {:?}", view.settings()?);
//!     }
//!     Ok(())
//! })?;
//! view.run(|view| {
//!     view.set_status(&cjdnsui::Status::default())?;
//!     Ok(())
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::{cell::RefCell, rc::{Rc, Weak}};
use cjdnsui::{observer::{BoxError, Event, NotifyError, Observable}, Settings, Status};
use tracing::{debug, error, info, trace};
use crate::gui::{self, SettingsPanel, StatusPanel};

/// Title of the window.
pub const APP_TITLE: &str = "cjdnsui";

/// The topics a `View` notifies observers of.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Topic {
    /// The user asked for the settings to be saved.
    SettingsSave = 0
}

/// The events a `View` notifies observers of.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ViewEvent {
    /// The user asked for the settings to be saved, get them with [`View::settings`].
    SettingsSave
}

impl Event for ViewEvent {
    type Topic = Topic;

    fn topic(&self) -> Topic {
        match self {
            Self::SettingsSave => Topic::SettingsSave
        }
    }
}

/// The errors which can occur when using a `View`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The panels don't exist until the view has been started by [`View::run`].
    #[error("The view hasn't been started")]
    NotStarted,

    /// [`View::run`] has already been called.
    #[error("The view has already been started")]
    AlreadyStarted,

    /// The view was used from within itself, e.g. an observer was added whilst observers were being notified.
    #[error("The view is busy")]
    Busy,

    /// The displayed status couldn't be read back.
    #[error("Invalid status")]
    Status {
        /// What the error actually is.
        #[from]
        source: cjdnsui::Error
    },

    /// An observer failed.
    #[error("Notifying observers failed")]
    Notify {
        /// What the error actually is.
        #[from]
        source: NotifyError<Topic>
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
enum Tab {
    #[default]
    Status,
    Settings
}

#[derive(Debug, Default)]
struct Panels {
    tab: Tab,
    status: StatusPanel,
    settings: SettingsPanel
}

impl Panels {
    /// Returns true if the user asked for the settings to be saved.
    fn show(&mut self, ctx: &egui::Context) -> bool {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Status, "Status");
                ui.selectable_value(&mut self.tab, Tab::Settings, "Settings");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.tab {
                Tab::Status => {
                    self.status.show(ui);
                    false
                },
                Tab::Settings => self.settings.show(ui)
            }
        }).inner
    }
}

#[derive(Debug)]
enum Lifecycle {
    Unstarted,
    Running(Panels)
}

#[derive(Debug)]
struct Inner {
    lifecycle: RefCell<Lifecycle>,
    observable: RefCell<Observable<ViewEvent>>
}

/// The application window.
///
/// Everything happens on the thread calling [`View::run`], cloning gives
/// another handle to the same view.
#[derive(Debug, Clone)]
pub struct View {
    inner: Rc<Inner>
}

/// A handle to a `View` which doesn't keep it alive,
/// for use by observers which need to call back into the view.
#[derive(Debug, Clone)]
pub struct WeakView {
    inner: Weak<Inner>
}

impl WeakView {
    /// Get the `View`, if it still exists.
    #[must_use]
    pub fn upgrade(&self) -> Option<View> {
        self.inner.upgrade().map(|inner| View { inner })
    }
}

impl View {
    /// Create a view which hasn't been started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                lifecycle: RefCell::new(Lifecycle::Unstarted),
                observable: RefCell::new(Observable::new())
            })
        }
    }

    /// Get a handle which doesn't keep the view alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakView {
        WeakView { inner: Rc::downgrade(&self.inner) }
    }

    /// Whether the view has been started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(*self.inner.lifecycle.borrow(), Lifecycle::Running(_))
    }

    /// Run callback whenever an event with topic occurs.
    ///
    /// Observers are called in the order they were added. Should one fail
    /// the remaining observers are skipped and the failure displayed to the user.
    ///
    /// # Errors
    ///
    /// [`Error::Busy`] if called by an observer being notified.
    pub fn add_observer(&self, topic: Topic, callback: impl FnMut(&ViewEvent) -> Result<(), BoxError> + 'static) -> Result<(), Error> {
        self.inner.observable.try_borrow_mut()
            .map_err(|_| Error::Busy)?
            .add_observer(topic, callback);
        Ok(())
    }

    /// Display status.
    ///
    /// # Errors
    ///
    /// * [`Error::NotStarted`] if the view hasn't been started.
    /// * [`Error::Busy`] if called whilst the view is drawing.
    pub fn set_status(&self, status: &Status) -> Result<(), Error> {
        self.with_panels(|panels| panels.status.set(status))
    }

    /// Get the displayed status.
    ///
    /// # Errors
    ///
    /// * [`Error::NotStarted`] if the view hasn't been started.
    /// * [`Error::Busy`] if called whilst the view is drawing.
    /// * [`Error::Status`] if the displayed status couldn't be read back (e.g. no status has been set).
    pub fn status(&self) -> Result<Status, Error> {
        Ok(self.with_panels(|panels| panels.status.get())??)
    }

    /// Replace the settings being edited.
    ///
    /// # Errors
    ///
    /// * [`Error::NotStarted`] if the view hasn't been started.
    /// * [`Error::Busy`] if called whilst the view is drawing.
    pub fn set_settings(&self, settings: &Settings) -> Result<(), Error> {
        self.with_panels(|panels| panels.settings.set(settings))
    }

    /// Get the settings as currently edited.
    ///
    /// # Errors
    ///
    /// * [`Error::NotStarted`] if the view hasn't been started.
    /// * [`Error::Busy`] if called whilst the view is drawing.
    pub fn settings(&self) -> Result<Settings, Error> {
        self.with_panels(|panels| panels.settings.get())
    }

    /// Start the view then open the window, returning once it's closed.
    ///
    /// `on_start` is called once, after the panels exist but before anything is drawn,
    /// making it the place to set the initial status and settings.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyStarted`] if the view has already been run.
    /// * If `on_start` fails.
    /// * If the window can't be created.
    pub fn run(&self, on_start: impl FnOnce(&Self) -> anyhow::Result<()> + 'static) -> anyhow::Result<()> {
        self.start()?;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 400.0]),
            ..eframe::NativeOptions::default()
        };
        let view = self.clone();

        trace!("Running egui app.");
        eframe::run_native(
            APP_TITLE,
            options,
            Box::new(move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, BoxError> {
                on_start(&view)?;
                let modal = {
                    let style = egui_modal::ModalStyle { default_width: Some(400.0), ..Default::default() };
                    egui_modal::Modal::new(&cc.egui_ctx, "Modal").with_style(&style)
                };
                Ok(Box::new(App { view, modal }))
            })
        ).map_err(|error| anyhow::anyhow!("Failed to run the window: {error}"))
    }

    /// Draw a frame, then notify observers of anything the user asked for.
    ///
    /// Returns how many observers were notified.
    ///
    /// # Errors
    ///
    /// * [`Error::NotStarted`] if the view hasn't been started.
    /// * [`Error::Busy`] if called whilst the view is drawing.
    /// * [`Error::Notify`] if an observer failed.
    pub fn update(&self, ctx: &egui::Context) -> Result<usize, Error> {
        // The panels must not be borrowed whilst notifying, observers may use them.
        let save = self.with_panels(|panels| panels.show(ctx))?;
        if save {
            self.notify(ViewEvent::SettingsSave)
        } else {
            Ok(0)
        }
    }

    fn start(&self) -> Result<(), Error> {
        let mut lifecycle = self.inner.lifecycle.try_borrow_mut().map_err(|_| Error::Busy)?;
        if matches!(*lifecycle, Lifecycle::Running(_)) {
            return Err(Error::AlreadyStarted);
        }
        *lifecycle = Lifecycle::Running(Panels::default());
        info!("Started view");
        Ok(())
    }

    fn with_panels<T>(&self, action: impl FnOnce(&mut Panels) -> T) -> Result<T, Error> {
        let mut lifecycle = self.inner.lifecycle.try_borrow_mut().map_err(|_| Error::Busy)?;
        match &mut *lifecycle {
            Lifecycle::Running(panels) => Ok(action(panels)),
            Lifecycle::Unstarted => Err(Error::NotStarted)
        }
    }

    fn notify(&self, event: ViewEvent) -> Result<usize, Error> {
        let mut observable = self.inner.observable.try_borrow_mut().map_err(|_| Error::Busy)?;
        let notified = observable.notify_observers(&event)?;
        debug!("Notified {notified} observers of {event:?}");
        Ok(notified)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    view: View,
    modal: egui_modal::Modal
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.modal.show_dialog();

        if let Err(error) = self.view.update(ctx) {
            error!("{error}");
            gui::modal_error(&self.modal, &anyhow::Error::new(error));
        }
    }
}


#[allow(clippy::missing_panics_doc, reason="tests")]
#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use super::*;

    fn status() -> Status {
        Status {
            address: String::from("fc5d:baa5:61fc:6ffd:9554:67f0:e290:7535"),
            public_key: String::from("lpu15wrt3tb6d8vngq9yh3lr4gmnkuv0rgcd2jwl5rp5v0mhlg30.k"),
            port: 11_234
        }
    }

    fn settings() -> Settings {
        Settings {
            admin_address: String::from("127.0.0.1:11234"),
            admin_password: String::from("NONE"),
            authorized_passwords: vec![String::from("abc")]
        }
    }

    fn started() -> View {
        let view = View::new();
        view.start().unwrap();
        view
    }

    fn frame(view: &View, input: egui::RawInput) -> Result<usize, Error> {
        let ctx = egui::Context::default();
        let mut result = Err(Error::Busy);
        let _ = ctx.run(input, |ctx| result = view.update(ctx));
        result
    }

    fn frames(view: &View, inputs: Vec<egui::RawInput>) -> Result<usize, Error> {
        let ctx = egui::Context::default();
        let mut notified = 0;
        for input in inputs {
            let mut result = Ok(0);
            let _ = ctx.run(input, |ctx| result = view.update(ctx));
            notified += result?;
        }
        Ok(notified)
    }

    fn save_input() -> egui::RawInput {
        let shortcut = gui::settings_panel::SAVE_SHORTCUT;
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: shortcut.logical_key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: shortcut.modifiers
            }],
            modifiers: shortcut.modifiers,
            ..egui::RawInput::default()
        }
    }

    fn show_settings_tab(view: &View) {
        view.with_panels(|panels| panels.tab = Tab::Settings).unwrap();
    }

    fn count_calls(view: &View, calls: &Rc<Cell<usize>>) {
        let calls = calls.clone();
        view.add_observer(Topic::SettingsSave, move |_| {
            calls.set(calls.get() + 1);
            Ok(())
        }).unwrap();
    }

    #[test]
    fn topics_start_at_zero() {
        assert_eq!(Topic::SettingsSave as u8, 0);
        assert_eq!(ViewEvent::SettingsSave.topic(), Topic::SettingsSave);
    }

    mod unstarted {
        use super::*;

        #[test]
        fn accessors_fail() {
            let view = View::new();
            assert!(!view.is_running());
            assert!(matches!(view.set_status(&status()), Err(Error::NotStarted)));
            assert!(matches!(view.status(), Err(Error::NotStarted)));
            assert!(matches!(view.set_settings(&settings()), Err(Error::NotStarted)));
            assert!(matches!(view.settings(), Err(Error::NotStarted)));
        }

        #[test]
        fn update_fails() {
            assert!(matches!(frame(&View::new(), egui::RawInput::default()), Err(Error::NotStarted)));
        }

        #[test]
        fn can_add_observers() {
            let view = View::default();
            assert!(view.add_observer(Topic::SettingsSave, |_| Ok(())).is_ok());
        }

        #[test]
        fn not_started_message() {
            assert_eq!(View::new().settings().unwrap_err().to_string(), "The view hasn't been started");
        }
    }

    mod start {
        use super::*;

        #[test]
        fn runs() {
            let view = View::new();
            assert!(view.start().is_ok());
            assert!(view.is_running());
        }

        #[test]
        fn only_once() {
            let view = started();
            assert!(matches!(view.start(), Err(Error::AlreadyStarted)));
            assert!(matches!(view.run(|_| Ok(())), Err(error) if matches!(error.downcast_ref::<Error>(), Some(Error::AlreadyStarted))));
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn status() {
            let view = started();
            view.set_status(&super::status()).unwrap();
            assert_eq!(view.status().unwrap(), super::status());
        }

        #[test]
        fn status_before_set() {
            let view = started();
            assert!(matches!(
                view.status(),
                Err(Error::Status { source: cjdnsui::Error::InvalidPort(text) }) if text == "Unknown"
            ));
        }

        #[test]
        fn settings() {
            let view = started();
            assert_eq!(view.settings().unwrap(), Settings::default());
            view.set_settings(&super::settings()).unwrap();
            assert_eq!(view.settings().unwrap(), super::settings());
        }

        #[test]
        fn shared_between_handles() {
            let view = started();
            let other = view.clone();
            view.set_settings(&super::settings()).unwrap();
            assert_eq!(other.settings().unwrap(), super::settings());
        }
    }

    mod update {
        use super::*;

        #[test]
        fn without_save() {
            let view = started();
            let calls = Rc::new(Cell::new(0));
            count_calls(&view, &calls);
            show_settings_tab(&view);

            assert_eq!(frame(&view, egui::RawInput::default()).unwrap(), 0);
            assert_eq!(calls.get(), 0);
        }

        #[test]
        fn save_notifies_observers() {
            let view = started();
            let calls = Rc::new(Cell::new(0));
            count_calls(&view, &calls);
            count_calls(&view, &calls);
            show_settings_tab(&view);

            assert_eq!(frame(&view, save_input()).unwrap(), 2);
            assert_eq!(calls.get(), 2);
        }

        #[test]
        fn save_button_notifies_observers() {
            let view = started();
            let calls = Rc::new(Cell::new(0));
            count_calls(&view, &calls);
            show_settings_tab(&view);

            assert_eq!(frames(&view, gui::click_inputs(gui::SAVE_BUTTON)).unwrap(), 1);
            assert_eq!(calls.get(), 1);
        }

        #[test]
        fn save_only_from_settings_tab() {
            let view = started();
            let calls = Rc::new(Cell::new(0));
            count_calls(&view, &calls);

            assert_eq!(frame(&view, save_input()).unwrap(), 0);
            assert_eq!(calls.get(), 0);
        }

        #[test]
        fn observer_can_get_settings() {
            let view = started();
            view.set_settings(&settings()).unwrap();
            show_settings_tab(&view);
            let saved = Rc::new(RefCell::new(None));
            {
                let saved = saved.clone();
                let weak = view.downgrade();
                view.add_observer(Topic::SettingsSave, move |_| {
                    let view = weak.upgrade().ok_or("View has gone")?;
                    saved.replace(Some(view.settings()?));
                    Ok(())
                }).unwrap();
            }

            frame(&view, save_input()).unwrap();
            assert_eq!(*saved.borrow(), Some(settings()));
        }

        #[test]
        fn observer_failure_stops_notification() {
            let view = started();
            show_settings_tab(&view);
            view.add_observer(Topic::SettingsSave, |_| Err("Couldn't reach cjdns".into())).unwrap();
            let calls = Rc::new(Cell::new(0));
            count_calls(&view, &calls);

            let error = frame(&view, save_input()).unwrap_err();
            assert_eq!(calls.get(), 0);
            assert!(matches!(&error, Error::Notify { source } if source.index == 0 && source.topic == Topic::SettingsSave));

            let chain = anyhow::Error::new(error).chain().map(ToString::to_string).collect::<Vec<_>>();
            assert_eq!(chain, ["Notifying observers failed", "Observer 0 of topic SettingsSave failed", "Couldn't reach cjdns"]);
        }

        #[test]
        fn observer_adding_observer_is_busy() {
            let view = started();
            show_settings_tab(&view);
            let result = Rc::new(RefCell::new(None));
            {
                let result = result.clone();
                let weak = view.downgrade();
                view.add_observer(Topic::SettingsSave, move |_| {
                    let view = weak.upgrade().ok_or("View has gone")?;
                    result.replace(Some(view.add_observer(Topic::SettingsSave, |_| Ok(()))));
                    Ok(())
                }).unwrap();
            }

            assert_eq!(frame(&view, save_input()).unwrap(), 1);
            assert!(matches!(*result.borrow(), Some(Err(Error::Busy))));
            assert_eq!(view.inner.observable.borrow().len(), 1);
        }
    }

    #[test]
    fn weak_view() {
        let view = View::new();
        let weak = view.downgrade();
        assert!(weak.upgrade().is_some());
        drop(view);
        assert!(weak.upgrade().is_none());
    }
}
