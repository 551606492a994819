//! Devkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the devkit
//! commands, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           devkit-cli (CLI)              │
//! │   (Marshals input, renders results)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (PasswordService, PlaygroundService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, Opener, Clipboard)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    devkit-adapters (Infrastructure)     │
//! │ (LocalFilesystem, SystemOpener, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (CharacterPool, CreationParameters)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use devkit_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>, opener: Arc<dyn Opener>) -> DevkitResult<()> {
//! // Passwords: raw input in, string out.
//! let password = PasswordService::new().generate_from_input("16", true, true)?;
//!
//! // Playgrounds: validated parameters in, result with an open action out.
//! let params = CreationParameters::new(
//!     PlaygroundName::new("Demo")?,
//!     "~/Playgrounds",
//!     PlaygroundTemplate::Empty,
//!     PlaygroundPlatform::Ios,
//! );
//! let playground = PlaygroundService::new(filesystem, opener).create(&params)?;
//! playground.open()?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PasswordService, Playground, PlaygroundService,
        ports::{Clipboard, Filesystem, Opener},
    };
    pub use crate::domain::{
        CharacterPool, CreationParameters, PasswordLength, PasswordOptions, PlaygroundName,
        PlaygroundPlatform, PlaygroundTemplate, TemplateFile,
    };
    pub use crate::error::{DevkitError, DevkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
