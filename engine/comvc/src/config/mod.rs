//! Run configuration.
//!
//! Built once from the command line and passed by reference; nothing in the
//! engine reads process-wide state.

use comv_diagnostic::ColorMode;
use comv_seal::{MaskScheme, SealError, DEFAULT_PLAIN_MODULUS};

use crate::Problem;

/// Options shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Classify data files concurrently.
    pub parallel: bool,
    /// Diagnostic coloring.
    pub color: ColorMode,
    /// Plaintext modulus of the sealing scheme.
    pub plain_modulus: u64,
    /// Fixed key seed for reproducible runs. `None` draws OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            parallel: true,
            color: ColorMode::Auto,
            plain_modulus: DEFAULT_PLAIN_MODULUS,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Split `args` into options and positional arguments.
    ///
    /// Options may appear anywhere. A lone `--` ends option parsing.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<(Self, Vec<String>), Problem> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();
        let mut options_done = false;

        for arg in args.iter().map(AsRef::as_ref) {
            if options_done || !arg.starts_with("--") {
                positional.push(arg.to_owned());
            } else if arg == "--" {
                options_done = true;
            } else {
                config.apply(arg)?;
            }
        }
        Ok((config, positional))
    }

    fn apply(&mut self, option: &str) -> Result<(), Problem> {
        if option == "--no-parallel" {
            self.parallel = false;
        } else if let Some(mode) = option.strip_prefix("--color=") {
            self.color = mode
                .parse()
                .map_err(|()| Problem::Usage(format!("unknown color mode `{mode}`")))?;
        } else if let Some(value) = option.strip_prefix("--plain-modulus=") {
            self.plain_modulus = number(option, value)?;
        } else if let Some(value) = option.strip_prefix("--seed=") {
            self.seed = Some(number(option, value)?);
        } else {
            return Err(Problem::Usage(format!("unknown option `{option}`")));
        }
        Ok(())
    }

    /// Build the sealing scheme this configuration describes.
    pub fn scheme(&self) -> Result<MaskScheme, SealError> {
        match self.seed {
            Some(seed) => MaskScheme::from_seed(self.plain_modulus, seed),
            None => MaskScheme::new(self.plain_modulus),
        }
    }
}

fn number(option: &str, value: &str) -> Result<u64, Problem> {
    value
        .parse()
        .map_err(|_| Problem::Usage(format!("`{option}` needs a non-negative integer")))
}
