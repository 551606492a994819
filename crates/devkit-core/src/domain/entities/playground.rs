//! Swift playground layout: creation parameters and template files.
//!
//! A playground is a directory `<name>.playground` with a fixed set of files:
//!
//! ```text
//! <name>.playground/
//! ├── timeline.xctimeline
//! ├── contents.xcplayground
//! ├── Contents.swift
//! └── playground.xcworkspace/
//!     └── contents.xcworkspacedata
//! ```
//!
//! Bodies are stored already dedented. Parameterized bodies use
//! `{{VARIABLE}}` placeholders resolved through [`RenderContext`].

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::render::RenderContext,
    value_objects::{PlaygroundName, PlaygroundPlatform, PlaygroundTemplate},
};

/// Directory extension of a playground bundle.
pub const PLAYGROUND_EXTENSION: &str = "playground";

/// Subdirectory holding the workspace descriptor.
pub const WORKSPACE_DIRECTORY: &str = "playground.xcworkspace";

const TIMELINE_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Timeline version="3.0">
   <TimelineItems>
   </TimelineItems>
</Timeline>
"#;

const WORKSPACE_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace version="1.0">
  <FileRef location="group:self:">
  </FileRef>
</Workspace>
"#;

const SETTINGS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<playground version='5.0'
            target-platform='{{PLATFORM}}'
            buildActiveScheme='true'
            executeOnSourceChanges='false'
            importAppTypes='true'>
    <timeline fileName='timeline.xctimeline'/>
</playground>
"#;

const EMPTY_SOURCE_BODY: &str = "import Foundation\n";

const SWIFTUI_SOURCE_BODY: &str = r#"import PlaygroundSupport
import SwiftUI

struct ContentView: View {

    var body: some View {
        Text("Hello World")
    }

}

PlaygroundPage.current.liveView = UIHostingController(rootView: ContentView())
"#;

/// Everything needed to create one playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationParameters {
    pub name: PlaygroundName,
    /// Parent directory; a leading `~` stands for the home directory.
    pub location: PathBuf,
    pub template: PlaygroundTemplate,
    pub platform: PlaygroundPlatform,
}

impl CreationParameters {
    pub fn new(
        name: PlaygroundName,
        location: impl Into<PathBuf>,
        template: PlaygroundTemplate,
        platform: PlaygroundPlatform,
    ) -> Self {
        Self {
            name,
            location: location.into(),
            template,
            platform,
        }
    }

    /// `<location>/<name>.playground`, with `~` expanded against `home`.
    ///
    /// Only `~` and `~/...` expand; `~user` forms are left untouched, as is
    /// everything when no home directory is known.
    pub fn playground_path(&self, home: Option<&Path>) -> PathBuf {
        let location = match self.location.to_str() {
            Some(raw) => PathBuf::from(
                shellexpand::tilde_with_context(raw, || home.and_then(Path::to_str)).as_ref(),
            ),
            None => self.location.clone(),
        };
        location.join(format!("{}.{PLAYGROUND_EXTENSION}", self.name))
    }

    /// The full, ordered list of files to materialise.
    ///
    /// Two fixed structural files, the source file chosen by `template`,
    /// then the settings file parameterized by `platform`.
    pub fn template_files(&self) -> Vec<TemplateFile> {
        let ctx = RenderContext::new(self.platform.target_platform());
        vec![
            TemplateFile::new(None, "timeline", "xctimeline", TIMELINE_BODY),
            TemplateFile::new(
                Some(WORKSPACE_DIRECTORY),
                "contents",
                "xcworkspacedata",
                WORKSPACE_BODY,
            ),
            source_file(self.template),
            TemplateFile::new(None, "contents", "xcplayground", ctx.render(SETTINGS_BODY)),
        ]
    }
}

fn source_file(template: PlaygroundTemplate) -> TemplateFile {
    let body = match template {
        PlaygroundTemplate::Empty => EMPTY_SOURCE_BODY,
        PlaygroundTemplate::SwiftUi => SWIFTUI_SOURCE_BODY,
    };
    TemplateFile::new(None, "Contents", "swift", body)
}

/// One file to write inside the playground directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub subdirectory: Option<&'static str>,
    pub base_name: &'static str,
    pub extension: &'static str,
    pub contents: String,
}

impl TemplateFile {
    pub fn new(
        subdirectory: Option<&'static str>,
        base_name: &'static str,
        extension: &'static str,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            subdirectory,
            base_name,
            extension,
            contents: contents.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base_name, self.extension)
    }

    /// Path relative to the playground root.
    pub fn relative_path(&self) -> PathBuf {
        match self.subdirectory {
            Some(dir) => Path::new(dir).join(self.file_name()),
            None => PathBuf::from(self.file_name()),
        }
    }
}
