use crate::request::PresentationRequest;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A rendered presentation, ready to be handed to the user as a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn for_request(request: &PresentationRequest, bytes: Vec<u8>) -> Download {
        Download {
            file_name: file_name_for(request.full_name()),
            mime_type: PDF_MIME_TYPE,
            bytes,
        }
    }
}

/// `presentacion_<name>.pdf`, with spaces (and path separators) in the name turned
/// into underscores
pub fn file_name_for(full_name: &str) -> String {
    let stem: String = full_name
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            ch => ch,
        })
        .collect();
    format!("presentacion_{stem}.pdf")
}
