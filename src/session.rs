//! One widget-building session: the workflow store, the most recent render
//! and the packaging gate.

use tracing::{info, warn};

use crate::error::{GenerateError, PackageError};
use crate::generator::{render_widget, GeneratedFileSet, GenerationSummary, TemplateRegistry};
use crate::package::{archive_file_name, Packager, PackagingGate};
use crate::workflow::WorkflowStore;

/// Archive bytes with the file name they should be saved under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct Session {
    store: WorkflowStore,
    registry: TemplateRegistry,
    generated: Option<GeneratedFileSet>,
    gate: PackagingGate,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TemplateRegistry::builtin())
    }
}

impl Session {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self::with_store(WorkflowStore::new(), registry)
    }

    pub fn with_store(store: WorkflowStore, registry: TemplateRegistry) -> Self {
        Self {
            store,
            registry,
            generated: None,
            gate: PackagingGate::new(),
        }
    }

    pub fn store(&self) -> &WorkflowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WorkflowStore {
        &mut self.store
    }

    /// Render the current state. Replaces any earlier render; on failure the
    /// earlier render is dropped too, so a stale bundle is never packaged.
    pub fn generate(&mut self) -> Result<&GeneratedFileSet, GenerateError> {
        self.generated = None;
        let files = render_widget(self.store.state(), &self.registry)?;
        Ok(self.generated.insert(files))
    }

    /// The most recent successful render, if any
    pub fn generated(&self) -> Option<&GeneratedFileSet> {
        self.generated.as_ref()
    }

    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary::from_state(self.store.state())
    }

    pub fn packaging_gate(&self) -> &PackagingGate {
        &self.gate
    }

    /// Package the most recent render.
    ///
    /// Refused with [`PackageError::Busy`] while another packaging run holds
    /// the gate. The render stays available whatever the outcome.
    pub fn package<P: Packager>(&self, packager: &P) -> Result<Archive, PackageError> {
        let files = self.generated.as_ref().ok_or(PackageError::NothingGenerated)?;
        let file_name = archive_file_name(&self.store.state().brief, packager.extension())?;
        let Some(_ticket) = self.gate.try_begin() else {
            warn!("packaging already in progress");
            return Err(PackageError::Busy);
        };
        let bytes = packager.package(files)?;
        info!(file = %file_name, bytes = bytes.len(), "packaged widget");
        Ok(Archive { file_name, bytes })
    }
}
