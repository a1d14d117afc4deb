use crate::pipeline::processors::{
    ContractProcessor, GenericProcessor, InvoiceProcessor, TypeProcessor,
};

/// Maps a document's declared type tag to the handler that processes it.
///
/// Total over all string inputs: known tags get their dedicated processor,
/// everything else (including the empty string) gets the generic one.
/// Never fails, no side effects.
#[derive(Default)]
pub struct TypeRouter {
    invoice: InvoiceProcessor,
    contract: ContractProcessor,
    generic: GenericProcessor,
}

impl TypeRouter {
    pub fn new() -> Self {
        TypeRouter {
            invoice: InvoiceProcessor::new(),
            contract: ContractProcessor::new(),
            generic: GenericProcessor::new(),
        }
    }

    pub fn resolve(&self, type_tag: &str) -> &dyn TypeProcessor {
        match type_tag {
            "invoice" => &self.invoice,
            "contract" => &self.contract,
            _ => &self.generic,
        }
    }
}
