//! Struct declarations needed by an ABI.
//!
//! Every tuple parameter (at any depth) refers to a struct. Structs are
//! deduplicated by [`Signature`], and each one is declared exactly once:
//! inside the single container referring to it, or in the shared scope
//! when several containers (or a file level hint) refer to it.
//!
//! The container of a reference is taken from the `internalType` hint
//! (`struct Exchange.Order` belongs to `Exchange`, `struct Order` to the
//! file level). Without a hint, a top level parameter belongs to the
//! generated interface and a nested one to the container of its parent.
use std::collections::{HashMap, HashSet};

use abisol_parser::tokens::{InternalType, Signature};
use abisol_parser::{AbiEntry, AbiParameter, AbiResult};

use crate::expand::SHARED_STRUCTS_INTERFACE;

/// Prefix of the identifiers generated for structs without name hint.
pub const SYNTHETIC_STRUCT_PREFIX: &str = "S_";

/// Where a struct is declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// File level, or the `__Structs` wrapper interface on compilers
    /// without file level structs.
    Shared,
    Container(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub signature: Signature,
    pub identifier: String,
    pub components: Vec<AbiParameter>,
    pub scope: Scope,
}

#[derive(Debug, Clone, Default)]
pub struct Declarations {
    declarations: Vec<Declaration>,
    by_signature: HashMap<Signature, usize>,
    /// Containers in first reference order, with the signatures they refer to.
    containers: Vec<(String, Vec<Signature>)>,
}

impl Declarations {
    pub fn collect(entries: &[AbiEntry], interface_name: &str) -> AbiResult<Self> {
        let mut collector = DeclarationCollector::new(interface_name);

        for entry in entries {
            collector.visit_entry(entry)?;
        }

        Ok(collector.finish())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// All declarations, in first encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn get(&self, signature: &Signature) -> Option<&Declaration> {
        self.by_signature
            .get(signature)
            .map(|idx| &self.declarations[*idx])
    }

    /// Containers in the order they were first referenced.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|(name, _)| name.as_str())
    }

    /// Signatures referenced from a container, in first reference order.
    pub fn container_signatures(&self, container: &str) -> &[Signature] {
        self.containers
            .iter()
            .find(|(name, _)| name == container)
            .map(|(_, signatures)| signatures.as_slice())
            .unwrap_or(&[])
    }

    /// Declarations of a scope, following the container iteration order and
    /// then the reference order inside each container.
    pub fn in_scope(&self, scope: &Scope) -> Vec<&Declaration> {
        let mut seen = HashSet::new();
        let mut out = vec![];

        let containers: Vec<&str> = match scope {
            Scope::Container(name) => vec![name.as_str()],
            Scope::Shared => self.containers().collect(),
        };

        for container in containers {
            for signature in self.container_signatures(container) {
                let Some(decl) = self.get(signature) else {
                    continue;
                };

                if &decl.scope == scope && seen.insert(signature) {
                    out.push(decl);
                }
            }
        }

        out
    }
}

/// A struct found while walking the ABI, before its identifier is assigned.
#[derive(Debug)]
struct FoundStruct {
    signature: Signature,
    components: Vec<AbiParameter>,
    name_hint: Option<String>,
}

#[derive(Debug)]
pub struct DeclarationCollector<'a> {
    interface_name: &'a str,
    /// Next id for structs without name hint.
    next_synthetic_id: usize,
    found: Vec<FoundStruct>,
    by_signature: HashMap<Signature, usize>,
    containers: Vec<(String, Vec<Signature>)>,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(interface_name: &'a str) -> Self {
        Self {
            interface_name,
            next_synthetic_id: 0,
            found: vec![],
            by_signature: HashMap::new(),
            containers: vec![],
        }
    }

    pub fn visit_entry(&mut self, entry: &AbiEntry) -> AbiResult<()> {
        for param in entry.parameters() {
            self.visit_parameter(param, self.interface_name)?;
        }

        Ok(())
    }

    /// Records the struct behind `param`, if any, and its nested structs.
    /// `context` is the container used when the parameter has no hint.
    pub fn visit_parameter(&mut self, param: &AbiParameter, context: &str) -> AbiResult<()> {
        let Some(signature) = Signature::of(param)? else {
            return Ok(());
        };

        let (container, name_hint) = match param.internal_type.as_deref().map(InternalType::parse)
        {
            Some(InternalType::Struct { container, name }) => {
                (container.unwrap_or_default(), Some(name))
            }
            _ => (context.to_string(), None),
        };

        let idx = match self.by_signature.get(&signature) {
            Some(idx) => *idx,
            None => {
                self.found.push(FoundStruct {
                    signature: signature.clone(),
                    components: param.components().to_vec(),
                    name_hint: None,
                });
                self.by_signature
                    .insert(signature.clone(), self.found.len() - 1);
                self.found.len() - 1
            }
        };

        if self.found[idx].name_hint.is_none() {
            self.found[idx].name_hint = name_hint;
        }

        // Members only need to be walked once per container.
        if self.reference(&container, &signature) {
            for c in param.components() {
                self.visit_parameter(c, &container)?;
            }
        }

        Ok(())
    }

    /// Returns true if the signature was not yet referenced from the container.
    fn reference(&mut self, container: &str, signature: &Signature) -> bool {
        let idx = match self.containers.iter().position(|(name, _)| name == container) {
            Some(idx) => idx,
            None => {
                self.containers.push((container.to_string(), vec![]));
                self.containers.len() - 1
            }
        };

        let signatures = &mut self.containers[idx].1;

        if signatures.contains(signature) {
            false
        } else {
            signatures.push(signature.clone());
            true
        }
    }

    pub fn finish(mut self) -> Declarations {
        // Interfaces share the file level namespace with structs.
        let mut used: HashSet<String> = self
            .containers
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| !name.is_empty())
            .chain([
                self.interface_name.to_string(),
                SHARED_STRUCTS_INTERFACE.to_string(),
            ])
            .collect();
        let mut declarations = Vec::with_capacity(self.found.len());

        for found in std::mem::take(&mut self.found) {
            let candidate = match found.name_hint {
                Some(name) => name,
                None => {
                    let name = format!("{}{}", SYNTHETIC_STRUCT_PREFIX, self.next_synthetic_id);
                    self.next_synthetic_id += 1;
                    name
                }
            };

            let identifier = unique_identifier(candidate, &mut used);

            let referencing: Vec<&str> = self
                .containers
                .iter()
                .filter(|(_, signatures)| signatures.contains(&found.signature))
                .map(|(name, _)| name.as_str())
                .collect();

            let scope = match referencing.as_slice() {
                [container] if !container.is_empty() => Scope::Container(container.to_string()),
                _ => Scope::Shared,
            };

            tracing::debug!(
                "struct `{}` {} declared in {:?}",
                identifier,
                found.signature,
                scope
            );

            declarations.push(Declaration {
                signature: found.signature,
                identifier,
                components: found.components,
                scope,
            });
        }

        let by_signature = declarations
            .iter()
            .enumerate()
            .map(|(idx, d)| (d.signature.clone(), idx))
            .collect();

        Declarations {
            declarations,
            by_signature,
            containers: self.containers,
        }
    }
}

fn unique_identifier(candidate: String, used: &mut HashSet<String>) -> String {
    if used.insert(candidate.clone()) {
        return candidate;
    }

    let mut k = 1;
    loop {
        let identifier = format!("{}_{}", candidate, k);
        if used.insert(identifier.clone()) {
            return identifier;
        }
        k += 1;
    }
}
