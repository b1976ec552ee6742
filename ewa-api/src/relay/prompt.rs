//! Prompt construction
//!
//! Resolves the request against the disposal reference data and frames it
//! for the generative-text service: a fixed system instruction plus a short
//! user prompt restating the request.

use ewa_common::DisposalDirectory;

/// Language used when the client does not ask for one
pub const DEFAULT_LANGUAGE: &str = "English";

/// What the browser asked the relay to explain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRequest {
    pub location: String,
    pub item_category: String,
    pub language: String,
}

/// Reference data resolved for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Every matching collection center as `"address, contact"`, comma-joined; may be empty
    pub addresses_and_contacts: String,
    /// Disposal guidance for the category; empty when the category is unknown
    pub disposal_method: String,
}

impl ResolvedReference {
    pub fn resolve(request: &ExplanationRequest, directory: &DisposalDirectory) -> Self {
        Self {
            addresses_and_contacts: directory.contact_summary(&request.location),
            disposal_method: directory.disposal_method(&request.item_category).to_string(),
        }
    }
}

/// Input to a [`super::Generator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
}

impl Prompt {
    pub fn build(request: &ExplanationRequest, reference: &ResolvedReference) -> Self {
        let item = &request.item_category;

        let system_instruction = format!(
            "You are an assistant that gives electronic waste disposal guidance for India. \
Give clear, accurate, location-specific instructions for disposing of e-waste.\n\
- Begin every answer with: Here's how you can dispose of a {item}:\n\
- Tell the user where they can hand over a {item}, using these collection centers: {centers}. \
Describe the disposal method using this guidance: {method}. Separate key points with <br>.\n\
- Give useful background on the {item}: the environmental impact of improper disposal, \
the benefits of recycling it, and the e-waste regulations that apply in India.\n\
- Format the answer with HTML tags such as <strong>, <pre> and <br> rather than markdown. \
Whenever you use <br>, use two in a row.\n\
- Respond in {language}.\n\
- Be polite, concise and informative so the user clearly understands their options.",
            item = item,
            centers = reference.addresses_and_contacts,
            method = reference.disposal_method,
            language = request.language,
        );

        let user_prompt = format!(
            "Hi, I'm located at {} and I have a {} that I need to dispose of. Can you help me with the process?",
            request.location, item
        );

        Self {
            system_instruction,
            user_prompt,
        }
    }
}
