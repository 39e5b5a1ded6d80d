//! Middleware extraction and per-verb chain resolution.

use std::collections::HashMap;

use crate::module::Export;
use crate::verb::Verb;

/// Reserved export name carrying a module's middleware declaration.
pub const MIDDLEWARES_EXPORT: &str = "middlewares";

/// A middleware declaration, either router-wide or per module.
///
/// The three shapes mirror what handler modules may export under the
/// reserved `middlewares` name: one handler, an ordered chain, or a mapping
/// from verb to either of those.
#[derive(Clone, Debug)]
pub enum MiddlewareSpec<H> {
    /// A single handler applied to every verb.
    Handler(H),
    /// An ordered chain applied to every verb.
    Chain(Vec<H>),
    /// Per-verb declarations; a verb with no entry gets no middleware.
    ///
    /// Lookup is exact: an `all` key applies only to `all` registrations,
    /// never implicitly to other verbs.
    PerVerb(HashMap<Verb, MiddlewareSpec<H>>),
}

impl<H: Clone> MiddlewareSpec<H> {
    /// Resolves this spec to the ordered handler list for one verb.
    fn resolve(&self, verb: Verb) -> Vec<H> {
        match self {
            Self::Handler(handler) => vec![handler.clone()],
            Self::Chain(chain) => chain.clone(),
            Self::PerVerb(map) => map
                .get(&verb)
                .map(|inner| inner.resolve(verb))
                .unwrap_or_default(),
        }
    }
}

/// Splits a module's exports into verb-handler entries and its middleware
/// declaration.
///
/// This is a non-mutating partition: the input is consumed and the reserved
/// entry (the first one named [`MIDDLEWARES_EXPORT`], if any) is returned
/// separately from the remaining exports. A `middlewares` entry exported as
/// a plain handler is treated as a single-handler spec.
pub fn partition_middleware<H>(
    exports: Vec<(String, Export<H>)>,
) -> (Vec<(String, Export<H>)>, Option<MiddlewareSpec<H>>) {
    let mut spec = None;
    let mut remaining = Vec::with_capacity(exports.len());

    for (name, value) in exports {
        if spec.is_none() && name == MIDDLEWARES_EXPORT {
            spec = Some(match value {
                Export::Middleware(declared) => declared,
                Export::Handler(handler) => MiddlewareSpec::Handler(handler),
            });
        } else {
            remaining.push((name, value));
        }
    }

    (remaining, spec)
}

/// The two independent middleware declarations in effect for one module.
pub(crate) struct MiddlewareStack<'a, H> {
    router_level: Option<&'a MiddlewareSpec<H>>,
    file_level: Option<MiddlewareSpec<H>>,
}

impl<'a, H: Clone> MiddlewareStack<'a, H> {
    pub(crate) fn new(
        router_level: Option<&'a MiddlewareSpec<H>>,
        file_level: Option<MiddlewareSpec<H>>,
    ) -> Self {
        Self {
            router_level,
            file_level,
        }
    }

    /// Returns the merged, ordered middleware chain for one verb.
    ///
    /// Router-wide middleware always precedes file-specific middleware.
    pub(crate) fn chain(&self, verb: Verb) -> Vec<H> {
        let mut chain = normalize(self.router_level, verb);
        chain.extend(normalize(self.file_level.as_ref(), verb));
        chain
    }
}

/// Normalizes an optional spec to an ordered handler list for one verb.
fn normalize<H: Clone>(spec: Option<&MiddlewareSpec<H>>, verb: Verb) -> Vec<H> {
    spec.map(|s| s.resolve(verb)).unwrap_or_default()
}
