#![deny(missing_docs)]

//! # Generator
//!
//! Orchestrates the pipeline over an ordered list of schema documents:
//!
//! 1. **Classify** every type node of every document.
//! 2. **Link** inheritance over the same nodes.
//! 3. **Assemble** the service and its operations.
//! 4. **Bind** methods against the finished registry.
//! 5. **Filter** to the configured operations.
//!
//! Each stage completes over all documents before the next starts.

use crate::assembler::ServiceAssembler;
use crate::binder::MethodBinder;
use crate::builder::TypeRegistryBuilder;
use crate::config::{GeneratorConfig, SOAP_SINGLE_ELEMENT_ARRAYS};
use crate::document::{DocumentReader, FileDocumentReader, SchemaDocument};
use crate::error::AppResult;
use crate::filter::OperationFilter;
use crate::model::{Method, Service, Type};
use serde::Serialize;
use tracing::{info, warn};

/// The finished class model handed to renderers.
#[derive(Debug, Clone)]
pub struct ClassModel {
    /// The service, owning the type registry it was built against.
    pub service: Service,
    /// Bound methods in operation declaration order.
    pub methods: Vec<Method>,
}

/// Definition bundle exposed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// Bound methods.
    pub methods: Vec<Method>,
    /// Service endpoint addresses.
    pub locations: Vec<String>,
    /// Generated class identifier of the service.
    pub service_identifier: String,
}

impl ClassModel {
    /// Types exposed by the service.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.service.types()
    }

    /// Builds the definition bundle.
    pub fn definition(&self) -> Definition {
        Definition {
            methods: self.methods.clone(),
            locations: self.service.locations.clone(),
            service_identifier: self.service.identifier.clone(),
        }
    }
}

/// Drives a full generation run.
pub struct Generator<R: DocumentReader = FileDocumentReader> {
    config: GeneratorConfig,
    reader: R,
}

impl Generator<FileDocumentReader> {
    /// Creates a generator reading documents from disk.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self::new(config, FileDocumentReader)
    }
}

impl<R: DocumentReader> Generator<R> {
    /// Creates a generator with a custom document reader.
    pub fn new(config: GeneratorConfig, reader: R) -> Self {
        Self { config, reader }
    }

    /// Validates the configuration, reads every input and builds the
    /// filtered class model.
    ///
    /// # Errors
    ///
    /// * `AppError::Configuration` - no inputs, or no service in any input.
    /// * `AppError::Io` / `AppError::Parse` - an input could not be read.
    pub fn generate(&self) -> AppResult<ClassModel> {
        self.config.validate()?;
        warn_on_features(&self.config);

        let docs = self.load_documents()?;
        let model = self.build_model(&docs)?;
        Ok(OperationFilter::new(&self.config.operation_names).apply(model))
    }

    /// Reads every configured input, in order.
    pub fn load_documents(&self) -> AppResult<Vec<SchemaDocument>> {
        self.config
            .input_file
            .paths()
            .into_iter()
            .map(|path| {
                info!(path = %path.display(), "loading schema document");
                self.reader.read(path)
            })
            .collect()
    }

    /// Runs the core pipeline over already loaded documents.
    ///
    /// # Errors
    ///
    /// `AppError::Configuration` when no document declares a service.
    pub fn build_model(&self, docs: &[SchemaDocument]) -> AppResult<ClassModel> {
        let mut builder = TypeRegistryBuilder::new(self.config.shared_types);
        for doc in docs {
            info!(source = doc.source.as_str(), nodes = doc.types.len(), "loading types");
            builder.classify_nodes(&doc.types);
        }
        builder.link_inheritance(docs.iter().flat_map(|doc| doc.types.iter()));
        let registry = builder.finish();

        let mut assembler = ServiceAssembler::new(self.config.naming());
        for doc in docs {
            assembler.add_document(doc);
        }
        let (service, pairings) = assembler.finish()?;

        let methods = MethodBinder::new(&registry).bind_all(&pairings);
        info!(
            service = service.name.as_str(),
            types = registry.len(),
            operations = service.operations.len(),
            methods = methods.len(),
            "class model built"
        );

        Ok(ClassModel {
            service: service.with_types(registry),
            methods,
        })
    }
}

/// Warns when single-element arrays are not enabled on the client.
///
/// Has no effect on the model.
pub fn warn_on_features(config: &GeneratorConfig) -> bool {
    if config.has_feature(SOAP_SINGLE_ELEMENT_ARRAYS) {
        return false;
    }
    warn!(
        features = config.soap_client_options.features,
        "SOAP_SINGLE_ELEMENT_ARRAYS is not set; array members holding a single value \
         will not deserialize as arrays"
    );
    true
}
