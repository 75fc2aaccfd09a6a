use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_subscriber::{
    Layer, filter::LevelFilter, filter::filter_fn, fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Name of the RON file holding all settings sections.
pub const SETTINGS_FILE_NAME: &str = "settings.ron";

/// Directory layout of an application.
///
/// Everything lives below `<base>/<studio>/<app_id>`: the settings file at the
/// root and log files in `logs/`.
#[derive(Debug, Clone)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Platform data directory layout (used in release builds).
    pub fn new(studio: &str, app_id: &str) -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_path(base, studio, app_id)
    }

    /// Layout rooted at an explicit base path (development builds and tests).
    pub fn with_base_path(base: impl Into<PathBuf>, studio: &str, app_id: &str) -> Self {
        Self {
            root: base.into().join(studio).join(app_id),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn log_file(&self, timestamp: &str) -> PathBuf {
        self.logs_dir().join(format!("{timestamp}.log"))
    }

    pub fn log_file_now(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        self.log_file(&timestamp)
    }

    pub fn ensure_directories(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::create_dir_all(self.logs_dir())
    }
}

/// Application infrastructure context.
///
/// Contains path management and logging infrastructure.
pub struct AppContext {
    paths: AppPaths,
    /// The log guard must be kept alive for the duration of the application
    /// to ensure log messages are properly flushed.
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl AppContext {
    pub fn settings_file(&self) -> PathBuf {
        self.paths.settings_file()
    }
}

/// Application metadata trait.
///
/// Define your application's identity by implementing this trait.
pub trait Application: Sized + 'static {
    const APP_ID: &'static str;
    const STUDIO: &'static str = "flyback";
}

/// Builder for creating applications with proper initialization.
pub struct AppBuilder<A: Application> {
    context: AppContext,
    _marker: PhantomData<A>,
}

impl<A: Application> AppBuilder<A> {
    /// Create a new application builder.
    ///
    /// This performs all the common initialization:
    /// - Resolves the directory layout (`.out/` in the workspace for debug builds)
    /// - Ensures all directories exist
    /// - Initializes logging (file + console)
    pub fn new(version: &'static str) -> Result<Self, BoxError> {
        #[cfg(debug_assertions)]
        let paths = AppPaths::with_base_path(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join(".out"),
            A::STUDIO,
            A::APP_ID,
        );
        #[cfg(not(debug_assertions))]
        let paths = AppPaths::new(A::STUDIO, A::APP_ID);

        paths.ensure_directories()?;

        let log_dir = paths.logs_dir();
        let log_file_path = paths.log_file_now();
        let log_filename = log_file_path
            .file_name()
            .ok_or("log file path should have a file name")?;

        let file_appender = tracing_appender::rolling::never(&log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        #[cfg(debug_assertions)]
        let level = LevelFilter::INFO;

        #[cfg(not(debug_assertions))]
        let level = LevelFilter::WARN;

        // Separate layer: file (non-blocking) + console (stdout)
        let file_layer = fmt::Layer::default()
            .with_target(false)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

        let console_layer = fmt::Layer::default()
            .with_target(false)
            .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init()?;

        tracing::info!(
            app = A::APP_ID,
            version,
            log = %log_file_path.display(),
            "Application initialized"
        );

        Ok(Self {
            context: AppContext {
                paths,
                _log_guard: guard,
            },
            _marker: PhantomData,
        })
    }

    /// Build a Bevy-based application.
    ///
    /// The `configure` callback receives the Bevy `App` by value and the `AppContext`,
    /// and must return the configured App.
    #[cfg(feature = "bevy")]
    pub fn build_with_bevy(
        self,
        configure: impl FnOnce(bevy::prelude::App, &AppContext) -> bevy::prelude::App,
    ) -> BevyApp<A> {
        let bevy_app = bevy::prelude::App::new();
        let configured_app = configure(bevy_app, &self.context);

        BevyApp {
            _context: self.context,
            app: configured_app,
            _marker: PhantomData,
        }
    }
}

/// Bevy-based application wrapper.
///
/// Contains both the infrastructure context and the Bevy App.
/// The context is kept alive to ensure logging continues working.
#[cfg(feature = "bevy")]
pub struct BevyApp<A: Application> {
    _context: AppContext,
    app: bevy::prelude::App,
    _marker: PhantomData<A>,
}

#[cfg(feature = "bevy")]
impl<A: Application> BevyApp<A> {
    /// Run the Bevy application.
    pub fn run(&mut self) {
        self.app.run();
    }
}
