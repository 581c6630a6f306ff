//! Named-type resolution into metadata handles.

use std::sync::Mutex;

use ilforge_blob::TypeHandle;
use indexmap::IndexMap;

use crate::descriptor::NamedTypeRef;
use crate::error::EncodeError;

/// Maps named type references to stable metadata handles.
///
/// Resolution must be idempotent: the same reference yields the same handle
/// every time, including when first resolutions race across threads. Two
/// handles for one identity would leave the produced module internally
/// inconsistent.
pub trait TypeHandleResolver {
    /// Handle for `reference`, allocating one first if the implementation
    /// resolves lazily.
    fn resolve(&self, reference: &NamedTypeRef) -> Result<TypeHandle, EncodeError>;

    /// Declared generic arity of the referenced definition (0 when the
    /// definition is not generic).
    fn declared_arity(&self, reference: &NamedTypeRef) -> Result<u32, EncodeError>;
}

/// Insertion-ordered handle table for one module under construction.
///
/// `resolve` is get-or-insert under a single mutex, so concurrent first
/// resolutions of the same reference still produce exactly one handle.
/// Rows are numbered from 1 in resolution order.
#[derive(Debug, Default)]
pub struct ModuleTypeTable {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    handles: IndexMap<NamedTypeRef, TypeHandle>,
    frozen: bool,
}

impl ModuleTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop allocating handles. After freezing, a reference without an
    /// existing handle fails with `UnknownType`; module builders freeze the
    /// table before emitting method bodies so no row appears behind the
    /// table writer's back.
    pub fn freeze(&self) {
        self.lock().frozen = true;
    }

    /// Number of distinct resolved references.
    pub fn len(&self) -> usize {
        self.lock().handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolved `(reference, handle)` pairs in resolution order, for the
    /// caller's table emission.
    pub fn snapshot(&self) -> Vec<(NamedTypeRef, TypeHandle)> {
        self.lock()
            .handles
            .iter()
            .map(|(reference, &handle)| (reference.clone(), handle))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("type table lock poisoned")
    }
}

impl TypeHandleResolver for ModuleTypeTable {
    fn resolve(&self, reference: &NamedTypeRef) -> Result<TypeHandle, EncodeError> {
        let mut inner = self.lock();
        if let Some(&handle) = inner.handles.get(reference) {
            return Ok(handle);
        }
        if inner.frozen {
            return Err(EncodeError::UnknownType(reference.clone()));
        }
        let handle = TypeHandle::type_def(inner.handles.len() as u32 + 1);
        inner.handles.insert(reference.clone(), handle);
        Ok(handle)
    }

    fn declared_arity(&self, reference: &NamedTypeRef) -> Result<u32, EncodeError> {
        Ok(reference.arity())
    }
}
