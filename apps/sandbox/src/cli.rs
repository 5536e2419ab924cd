//! Command-line arguments for the sandbox binary.

use crate::demos::Demo;

use clap::{Parser, ValueEnum};

/// Run Daraja sandbox scenarios against the configured environment.
#[derive(Parser, Debug)]
#[command(name = "mpesa-sandbox", version)]
pub struct Args {
    /// Scenarios to run, in order. Defaults to stk-push.
    #[arg(value_enum, ignore_case = true)]
    pub demos: Vec<Demo>,

    /// Run every scenario.
    #[arg(long, conflicts_with = "demos")]
    pub all: bool,
}

impl Args {
    /// The scenarios to run, resolving `--all` and the empty default.
    pub fn selected_demos(&self) -> Vec<Demo> {
        if self.all {
            return Demo::value_variants().to_vec();
        }

        if self.demos.is_empty() {
            return vec![Demo::StkPush];
        }

        self.demos.clone()
    }
}
