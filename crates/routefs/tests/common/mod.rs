#![allow(dead_code)]

use std::path::{Path, PathBuf};

use routefs::{Export, HostRouter, Verb};

/// One recorded registration call, with the handler appended to the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub verb: Verb,
    pub route: String,
    pub chain: Vec<&'static str>,
}

/// A host router that records registrations instead of dispatching.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    pub registrations: Vec<Registration>,
}

impl RecordingRouter {
    pub fn routes(&self) -> Vec<(Verb, String)> {
        self.registrations
            .iter()
            .map(|r| (r.verb, r.route.clone()))
            .collect()
    }

    pub fn find(&self, verb: Verb, route: &str) -> &Registration {
        self.registrations
            .iter()
            .find(|r| r.verb == verb && r.route == route)
            .unwrap_or_else(|| panic!("no registration for {verb} {route}"))
    }

    pub fn has(&self, verb: Verb, route: &str) -> bool {
        self.registrations
            .iter()
            .any(|r| r.verb == verb && r.route == route)
    }
}

impl HostRouter for RecordingRouter {
    type Handler = &'static str;
    type Options = ();

    fn with_options((): ()) -> Self {
        Self::default()
    }

    fn register(
        &mut self,
        verb: Verb,
        route: &str,
        mut middleware: Vec<&'static str>,
        handler: &'static str,
    ) {
        middleware.push(handler);
        self.registrations.push(Registration {
            verb,
            route: route.to_string(),
            chain: middleware,
        });
    }
}

/// A host router that rejects every verb.
#[derive(Default)]
pub struct UnsupportingRouter {
    pub registrations: usize,
}

impl HostRouter for UnsupportingRouter {
    type Handler = &'static str;
    type Options = ();

    fn with_options((): ()) -> Self {
        Self::default()
    }

    fn supports(&self, _verb: Verb) -> bool {
        false
    }

    fn register(
        &mut self,
        _verb: Verb,
        _route: &str,
        _middleware: Vec<&'static str>,
        _handler: &'static str,
    ) {
        self.registrations += 1;
    }
}

/// Shorthand for a named handler export.
pub fn handler(name: &str, value: &'static str) -> (String, Export<&'static str>) {
    (name.to_string(), Export::Handler(value))
}

/// Creates an empty file, including its parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create route directories");
    }
    std::fs::write(path, b"").expect("create route file");
}

/// Creates every listed file under `root` and returns their full paths.
pub fn route_tree(root: &Path, files: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| {
            let path = root.join(file);
            touch(&path);
            path
        })
        .collect()
}
