//! Converter registry
//!
//! Maps `(source format, target format)` pairs to conversion functions.
//! Pairs without a direct converter are served by chaining registered
//! converters along the shortest path between the two formats.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::sync::{Arc, OnceLock};

use rutags_core::{to_ud14, to_ud20, SchemaVersion, MYSTEM};

use crate::error::{ApiError, Result};

/// Conversion function: `(tag, word form) -> tag`
pub type ConverterFn = Arc<dyn Fn(&str, Option<&str>) -> String + Send + Sync>;

type BuiltinConverter = fn(&str, Option<&str>) -> String;

const BUILTIN: [(&str, SchemaVersion, BuiltinConverter); 2] = [
    (MYSTEM, SchemaVersion::Ud14, to_ud14),
    (MYSTEM, SchemaVersion::Ud20, to_ud20),
];

static REGISTRY: OnceLock<ConverterRegistry> = OnceLock::new();

/// Process-wide registry holding the built-in converters.
///
/// Initialized on first access and read-only afterwards.
pub fn registry() -> &'static ConverterRegistry {
    REGISTRY.get_or_init(ConverterRegistry::with_builtin)
}

/// Append-only registry of tag converters
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: BTreeMap<String, BTreeMap<String, ConverterFn>>,
}

impl ConverterRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every converter shipped with this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for (from, version, converter) in BUILTIN {
            registry.insert(
                from.to_string(),
                version.code().to_string(),
                Arc::new(converter),
            );
        }
        registry
    }

    /// Register the built-in converters into this registry
    pub fn register_builtin(&mut self) -> Result<()> {
        for (from, version, converter) in BUILTIN {
            self.register(from, version.code(), converter)?;
        }
        Ok(())
    }

    /// Register a converter for `from -> to`.
    ///
    /// A pair can be registered once; a second registration is rejected.
    pub fn register<F>(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        converter: F,
    ) -> Result<()>
    where
        F: Fn(&str, Option<&str>) -> String + Send + Sync + 'static,
    {
        let (from, to) = (from.into(), to.into());

        if self.get(&from, &to).is_some() {
            return Err(ApiError::DuplicateConverter { from, to });
        }

        self.insert(from, to, Arc::new(converter));
        Ok(())
    }

    fn insert(&mut self, from: String, to: String, converter: ConverterFn) {
        log::debug!("registered converter {from} -> {to}");
        self.converters.entry(from).or_default().insert(to, converter);
    }

    /// Directly registered converter for `from -> to`
    pub fn get(&self, from: &str, to: &str) -> Option<&ConverterFn> {
        self.converters.get(from).and_then(|targets| targets.get(to))
    }

    /// Directly registered pairs, sorted
    pub fn supported(&self) -> Vec<(&str, &str)> {
        self.converters
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .keys()
                    .map(move |to| (from.as_str(), to.as_str()))
            })
            .collect()
    }

    /// Every format that appears on either side of a registered pair
    pub fn formats(&self) -> BTreeSet<&str> {
        self.supported()
            .into_iter()
            .flat_map(|(from, to)| [from, to])
            .collect()
    }

    /// Converter for `from -> to`, composed from several registered
    /// converters when no direct one exists
    pub fn converter(&self, from: &str, to: &str) -> Result<ConverterFn> {
        if let Some(direct) = self.get(from, to) {
            return Ok(Arc::clone(direct));
        }

        let formats = self.formats();
        for format in [from, to] {
            if !formats.contains(format) {
                return Err(ApiError::UnknownFormat(format.to_string()));
            }
        }

        if from == to {
            return Ok(Arc::new(|tag: &str, _word: Option<&str>| tag.to_string()));
        }

        let path = self
            .find_path(from, to)
            .ok_or_else(|| ApiError::NoConversionPath {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        log::debug!("chaining converters {}", path.join(" -> "));

        let steps: Vec<ConverterFn> = path
            .windows(2)
            .filter_map(|pair| self.get(pair[0], pair[1]).cloned())
            .collect();

        Ok(Arc::new(move |tag: &str, word: Option<&str>| {
            steps
                .iter()
                .fold(tag.to_string(), |tag, step| step(&tag, word))
        }))
    }

    /// Convert one tag from `from` to `to`
    pub fn convert(&self, tag: &str, from: &str, to: &str, word: Option<&str>) -> Result<String> {
        let converter = self.converter(from, to)?;
        Ok(converter(tag, word))
    }

    /// Shortest chain of formats from `from` to `to`, both ends included.
    /// Ties resolve to the lexicographically first neighbour.
    fn find_path<'a>(&'a self, from: &'a str, to: &str) -> Option<Vec<&'a str>> {
        let mut previous: BTreeMap<&str, &str> = BTreeMap::new();
        let mut queue = VecDeque::from([from]);

        while let Some(format) = queue.pop_front() {
            if format == to {
                let mut path = vec![format];
                let mut current = format;
                while let Some(&prev) = previous.get(current) {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return Some(path);
            }

            let Some(targets) = self.converters.get(format) else {
                continue;
            };
            for next in targets.keys().map(String::as_str) {
                if next != from && !previous.contains_key(next) {
                    previous.insert(next, format);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("supported", &self.supported())
            .finish()
    }
}
