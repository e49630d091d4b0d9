//! Completion spec model and script generation.
//!
//! # Architecture
//!
//! A [`Spec`] is a plain owned tree of [`Subcommand`]s, each holding its
//! [`CliOption`]s and positional [`Argument`]s. The tree knows nothing about
//! where it came from: front ends (see `figspec-toolinfo`) build it, and
//! [`ScriptGenerator`] turns it into an importable TypeScript module for
//! shell-completion tooling.
//!
//! Every optional field serializes only when it carries information. `None`,
//! empty sequences and `false` flags never reach the output.
//!
//! # Example
//!
//! ```ignore
//! use figspec_schema::{Argument, CliOption, Spec, Subcommand};
//!
//! let mut root = Subcommand::new("mycli");
//! root.options = Some(vec![CliOption::new(["--verbose", "-v"])]);
//! root.arguments = Some(vec![Argument::named("file")]);
//!
//! println!("{}", Spec::new(root).script()?);
//! ```

mod icon;
mod script;
mod spec;

pub use icon::{Icon, IconError, Overlay, Preset};
pub use script::{DEFAULT_TYPE_NAME, ScriptError, ScriptGenerator};
pub use spec::{
    Argument, ArgumentParserDirectives, CliOption, Presentation, RepeatCount, Spec, Subcommand,
    SubcommandParserDirectives, Template, non_empty,
};
