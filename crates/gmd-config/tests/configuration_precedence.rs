//! Behavioural coverage for configuration layering.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use ortho_config::OrthoConfig;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use gmd_config::{
    Config, OutputType, default_entry_point, default_log_filter, default_log_format,
    default_source_dir, default_target_dir,
};

const OUTPUT_TYPE_ENV: &str = "GMD_OUTPUT_TYPE";

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Harness {
    temp_dir: TempDir,
    cli_args: RefCell<Vec<OsString>>,
    previous_env: RefCell<Option<Option<OsString>>>,
    loaded: RefCell<Option<Config>>,
    error: RefCell<Option<String>>,
    _env_lock: MutexGuard<'static, ()>,
}

impl Harness {
    fn new() -> Self {
        let env_lock = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => panic!("failed to create temporary directory: {error}"),
        };
        Self {
            temp_dir,
            cli_args: RefCell::new(vec![OsString::from("gmd")]),
            previous_env: RefCell::new(None),
            loaded: RefCell::new(None),
            error: RefCell::new(None),
            _env_lock: env_lock,
        }
    }

    fn write_config(&self, output_type: &str) {
        let path = self.temp_dir.path().join("gmd.toml");
        let toml = format!("output_type = \"{output_type}\"\n");
        if let Err(error) = fs::write(&path, toml) {
            panic!("failed to write configuration: {error}");
        }

        let mut args = self.cli_args.borrow_mut();
        args.push(OsString::from("--config-path"));
        args.push(path.into_os_string());
    }

    fn set_env(&self, value: &str) {
        let previous = std::env::var_os(OUTPUT_TYPE_ENV);
        // Environment mutation is unsafe on edition 2024; the harness holds
        // the process-wide lock and restores the value in `Drop`.
        unsafe { std::env::set_var(OUTPUT_TYPE_ENV, value) };
        self.previous_env.borrow_mut().get_or_insert(previous);
    }

    fn push_cli_arg(&self, arg: impl Into<OsString>) {
        self.cli_args.borrow_mut().push(arg.into());
    }

    fn load(&self) {
        if self.loaded.borrow().is_some() || self.error.borrow().is_some() {
            return;
        }

        let args = self.cli_args.borrow().clone();
        match Config::load_from_iter(args) {
            Ok(config) => {
                *self.loaded.borrow_mut() = Some(config);
            }
            Err(error) => {
                *self.error.borrow_mut() = Some(error.to_string());
            }
        }
    }

    fn loaded_config(&self) -> Config {
        self.load();
        if let Some(error) = self.error.borrow().as_ref() {
            panic!("configuration failed to load: {error}");
        }
        match self.loaded.borrow().as_ref() {
            Some(config) => config.clone(),
            None => panic!("configuration was not loaded"),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        if let Some(previous) = self.previous_env.borrow_mut().take() {
            match previous {
                Some(value) => unsafe { std::env::set_var(OUTPUT_TYPE_ENV, value) },
                None => unsafe { std::env::remove_var(OUTPUT_TYPE_ENV) },
            }
        }
    }
}

fn parse_output_type(text: &str) -> OutputType {
    match text.parse::<OutputType>() {
        Ok(output) => output,
        Err(error) => panic!("invalid output type '{text}': {error}"),
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

#[given("a configuration file setting the output type to \"{output}\"")]
fn given_configuration_file(harness: &Harness, output: String) {
    harness.write_config(&output);
}

#[given("the environment overrides the output type to \"{output}\"")]
fn given_environment_override(harness: &Harness, output: String) {
    harness.set_env(&output);
}

#[when("the CLI sets the output type to \"{output}\"")]
fn when_cli_override(harness: &Harness, output: String) {
    harness.push_cli_arg("--output-type");
    harness.push_cli_arg(OsString::from(&output));
}

#[when("the configuration loads without overrides")]
fn when_load_without_overrides(harness: &Harness) {
    harness.load();
}

#[then("loading the configuration resolves the output type to \"{output}\"")]
fn then_resolved_output(harness: &Harness, output: String) {
    let config = harness.loaded_config();
    assert_eq!(config.output_type(), parse_output_type(&output));
}

#[then("loading the configuration applies the built-in defaults")]
fn then_defaults_applied(harness: &Harness) {
    let config = harness.loaded_config();
    assert_eq!(config.source_dir(), &default_source_dir());
    assert_eq!(config.target_dir(), &default_target_dir());
    assert_eq!(config.output_type(), OutputType::Md);
    assert_eq!(config.entry_point(), default_entry_point());
    assert_eq!(config.log_filter(), default_log_filter());
    assert_eq!(config.log_format(), default_log_format());
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Built-in defaults apply when nothing is configured"
)]
fn defaults_apply(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Configuration file overrides defaults"
)]
fn file_overrides_defaults(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Environment overrides the configuration file"
)]
fn environment_overrides_file(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Command-line flags override every other layer"
)]
fn cli_overrides_everything(#[from(harness)] harness: Harness) {
    let _ = harness;
}
