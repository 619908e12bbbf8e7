use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use euclid::{Attributes, Control, ControlError, ValueRange};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    pub value: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    #[serde(default)]
    pub slider: Attributes,
}

impl Config {
    /// Applies attributes, range and value. The value is clamped against the new range and
    /// written once. A rejected range or attribute batch leaves the control untouched.
    pub fn apply(&self, control: &mut Control) -> Result<(), ConfigError> {
        let minimum = self.minimum.unwrap_or(control.value_minimum());
        let maximum = self.maximum.unwrap_or(control.value_maximum());
        ValueRange::new(minimum, maximum)?;
        self.slider.resolve(control.style(), control.span())?;

        let value = self.value.unwrap_or(control.value());
        control.configure(&self.slider)?;
        control.set_range_and_value(minimum, maximum, value)?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid slider settings: {0}")]
    Control(#[from] ControlError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "euclid", "euclid").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("EUCLID"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the config at `path`, falling back to defaults when it is missing or broken.
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    load_config(path).unwrap_or_else(|e| {
        log::error!("Failed to load config {}: {}", path.display(), e);
        Config::default()
    })
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Whether `event` changed the config file itself. Reads and changes to sibling files in the
/// watched directory are ignored.
fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if touches_config(&event, &config_path) => {
                log::debug!("{:?} on {}", event.kind, config_path.display());
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{HandleType, Tint};

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config_parses() {
        let config = parse(DEFAULT_CONFIG);
        let mut control = Control::default();
        config.apply(&mut control).unwrap();

        assert_eq!(control.value_minimum(), 0.0);
        assert_eq!(control.value_maximum(), 100.0);
        assert_eq!(control.value(), 25.0);
        assert_eq!(control.style().track_width, 8.0);
    }

    #[test]
    fn test_sparse_slider_table() {
        let config = parse(
            r##"
            value = 0.75

            [slider]
            track_max_angle = 270
            thumb_tint = "#ff0000"
            handle_type = "closed"
            "##,
        );

        assert_eq!(config.value, Some(0.75));
        assert_eq!(config.minimum, None);
        assert_eq!(config.slider.track_max_angle, Some(270.0));
        assert_eq!(config.slider.thumb_tint, Some(Tint::rgb(1.0, 0.0, 0.0)));
        assert_eq!(
            config.slider.handle_type,
            Some(HandleType::DoubleCircleWithClosedCenter)
        );
        assert_eq!(config.slider.track_width, None);
    }

    #[test]
    fn test_invalid_config_leaves_control_untouched() {
        let mut control = Control::default();
        let config = Config {
            value: Some(0.1),
            minimum: Some(0.0),
            maximum: Some(10.0),
            slider: Attributes::new().track_min_angle(400.0),
        };

        assert!(matches!(
            config.apply(&mut control),
            Err(ConfigError::Control(ControlError::EmptySpan { .. }))
        ));
        assert_eq!(control.value_maximum(), 1.0);
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn test_reload_writes_value_once() {
        let mut control = Control::default();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        control.subscribe(move |value| sink.borrow_mut().push(value));

        let config = Config {
            value: Some(7.0),
            minimum: Some(2.0),
            maximum: Some(10.0),
            ..Config::default()
        };
        config.apply(&mut control).unwrap();

        assert_eq!(control.value(), 7.0);
        assert_eq!(*seen.borrow(), vec![7.0]);
    }

    #[test]
    fn test_reload_without_value_reclamps_current() {
        let mut control = Control::default();
        let config = Config {
            minimum: Some(2.0),
            maximum: Some(10.0),
            ..Config::default()
        };
        config.apply(&mut control).unwrap();
        assert_eq!(control.value(), 2.0);
    }

    #[test]
    fn test_only_config_file_changes_trigger_reload() {
        use notify::event::{AccessKind, CreateKind, ModifyKind};

        let path = PathBuf::from("/tmp/euclid/config.toml");
        let event = |kind, file: &str| Event::new(kind).add_path(PathBuf::from(file));

        let cases = vec![
            (EventKind::Modify(ModifyKind::Any), "/tmp/euclid/config.toml", true),
            (EventKind::Create(CreateKind::File), "/tmp/euclid/config.toml", true),
            (EventKind::Modify(ModifyKind::Any), "/tmp/euclid/other.toml", false),
            (EventKind::Access(AccessKind::Any), "/tmp/euclid/config.toml", false),
        ];

        for (kind, file, expected) in cases {
            let changed = event(kind.clone(), file);
            assert_eq!(touches_config(&changed, &path), expected, "{kind:?} {file}");
        }
    }

    #[test]
    fn test_config_serializes_to_json() {
        let config = Config {
            value: Some(3.0),
            slider: Attributes::new().has_thumb(false),
            ..Config::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["value"], 3.0);
        assert_eq!(json["slider"]["has_thumb"], false);
    }
}
