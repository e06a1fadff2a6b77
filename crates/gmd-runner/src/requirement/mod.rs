//! Library requirements handed to the resolution capability.
//!
//! A [`RequirementSet`] is built once per invocation and is complete before
//! any resolution is attempted: the platform classifier runs first, then
//! every requirement is constructed, and only then is the set submitted.

use std::fmt;

use gmd_config::Config;
use tracing::debug;

use crate::error::RunError;
use crate::platform::{HostPlatform, PlatformTag};

/// Tracing target for requirement construction.
const REQUIREMENT_TARGET: &str = "gmd_runner::requirement";

const GROOVY_GROUP: &str = "org.apache.groovy";
const IVY_GROUP: &str = "org.apache.ivy";
const LOG4J_GROUP: &str = "org.apache.logging.log4j";
const GMD_GROUP: &str = "se.alipsa.gmd";
const JAVAFX_GROUP: &str = "org.openjfx";

/// Packaging of every requested artifact.
pub const ARTIFACT_EXTENSION: &str = "jar";

/// Dependency scope of a requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Needed on the class path when the processor runs.
    #[default]
    Runtime,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => f.write_str("runtime"),
        }
    }
}

/// GUI toolkit modules the processor needs, one native artifact each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolkitModule {
    /// Core collections and properties.
    Base,
    /// Scene graph and rendering.
    Graphics,
    /// UI controls.
    Controls,
    /// Desktop integration bridge.
    Swing,
    /// Embedded web engine, used for HTML and PDF rendering.
    Web,
}

impl ToolkitModule {
    /// Every module, in the order they are requested.
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Graphics,
        Self::Controls,
        Self::Swing,
        Self::Web,
    ];

    /// Artifact name of the module.
    #[must_use]
    pub const fn artifact_name(self) -> &'static str {
        match self {
            Self::Base => "javafx-base",
            Self::Graphics => "javafx-graphics",
            Self::Controls => "javafx-controls",
            Self::Swing => "javafx-swing",
            Self::Web => "javafx-web",
        }
    }
}

/// Identity of a requirement: group, name and optional classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequirementId {
    group: String,
    name: String,
    classifier: Option<String>,
}

impl RequirementId {
    /// Creates an identity.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        classifier: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            classifier,
        }
    }

    /// Coordinate group.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Coordinate name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform classifier, if any.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// A named, versioned, optionally platform-tagged library dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    id: RequirementId,
    version: String,
    scope: Scope,
}

impl Requirement {
    /// Creates a platform-independent runtime requirement.
    #[must_use]
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            id: RequirementId::new(group, name, None),
            version: version.to_owned(),
            scope: Scope::Runtime,
        }
    }

    /// Creates a runtime requirement for the native variant of `platform`.
    #[must_use]
    pub fn with_platform(group: &str, name: &str, version: &str, platform: PlatformTag) -> Self {
        Self {
            id: RequirementId::new(group, name, Some(platform.classifier().to_owned())),
            version: version.to_owned(),
            scope: Scope::Runtime,
        }
    }

    /// Identity of the requirement.
    #[must_use]
    pub const fn id(&self) -> &RequirementId {
        &self.id
    }

    /// Requested version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Dependency scope.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// Maven coordinate, `group:name[:jar:classifier]:version`.
    #[must_use]
    pub fn coordinate(&self) -> String {
        let Self { id, version, .. } = self;
        id.classifier().map_or_else(
            || format!("{}:{}:{version}", id.group, id.name),
            |classifier| {
                format!(
                    "{}:{}:{ARTIFACT_EXTENSION}:{classifier}:{version}",
                    id.group, id.name
                )
            },
        )
    }
}

/// Versions of the libraries placed on the processor class path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryVersions {
    /// Groovy runtime, templates and JSR-223 bridge.
    pub groovy: String,
    /// Log4j core.
    pub log4j: String,
    /// The gmd processor itself.
    pub gmd: String,
    /// Apache Ivy.
    pub ivy: String,
    /// JavaFX modules.
    pub javafx: String,
}

impl LibraryVersions {
    /// Extracts the library versions from the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            groovy: config.groovy_version.clone(),
            log4j: config.log4j_version.clone(),
            gmd: config.gmd_version.clone(),
            ivy: config.ivy_version.clone(),
            javafx: config.javafx_version.clone(),
        }
    }
}

impl Default for LibraryVersions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Ordered, fully constructed list of requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSet {
    platform: PlatformTag,
    requirements: Vec<Requirement>,
}

impl RequirementSet {
    /// Builds the requirement set for `platform`.
    ///
    /// Platform-independent libraries come first, followed by one
    /// requirement per [`ToolkitModule`], all tagged with `platform`.
    #[must_use]
    pub fn build(versions: &LibraryVersions, platform: PlatformTag) -> Self {
        let mut requirements = vec![
            Requirement::new(GROOVY_GROUP, "groovy", &versions.groovy),
            Requirement::new(GROOVY_GROUP, "groovy-templates", &versions.groovy),
            Requirement::new(GROOVY_GROUP, "groovy-jsr223", &versions.groovy),
            Requirement::new(IVY_GROUP, "ivy", &versions.ivy),
            Requirement::new(LOG4J_GROUP, "log4j-core", &versions.log4j),
            Requirement::new(GMD_GROUP, "gmd-core", &versions.gmd),
        ];
        requirements.extend(ToolkitModule::ALL.iter().map(|module| {
            Requirement::with_platform(
                JAVAFX_GROUP,
                module.artifact_name(),
                &versions.javafx,
                platform,
            )
        }));

        debug!(
            target: REQUIREMENT_TARGET,
            %platform,
            count = requirements.len(),
            "built requirement set"
        );
        Self {
            platform,
            requirements,
        }
    }

    /// Classifies `host` and builds the requirement set for it.
    ///
    /// # Errors
    ///
    /// Propagates [`RunError::UnsupportedPlatform`] from the classifier.
    pub fn for_host(versions: &LibraryVersions, host: &HostPlatform) -> Result<Self, RunError> {
        let platform = host.classify()?;
        Ok(Self::build(versions, platform))
    }

    /// Platform the native requirements were tagged with.
    #[must_use]
    pub const fn platform(&self) -> PlatformTag {
        self.platform
    }

    /// Number of requirements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Iterates the requirements in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, Requirement> {
        self.requirements.iter()
    }

    /// Requirements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Requirement] {
        &self.requirements
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
