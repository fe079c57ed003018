//! Prompt construction for the bilingual extraction task.
//!
//! Both blocks are fixed templates; the only variable part is the user's query,
//! inserted verbatim at the end of the user prompt. No escaping is applied —
//! the model is steered by the few-shot examples and the JSON-only directive.

/// System instruction describing the extraction task and the required output shape.
pub const SYSTEM_PROMPT: &str = "\
You are an expert AI assistant for an agro-food product search engine. Your sole job \
is to analyze a user's messy, multilingual query.
You must understand the user's intent, ignoring typos. Then, you will extract the main \
product and its attributes.
Finally, you must provide this structured information in BOTH English and French.
Your entire response must be ONLY a single, clean, valid JSON object with the keys \
\"english_product\", \"english_attributes\", \"french_product\", and \"french_attributes\".
Do not add any other text or explanations.";

/// Worked input/output pairs embedded in every user prompt. The JSON sides
/// double as documentation of the expected value conventions: attributes are
/// short tokens (quantities, qualifiers), not full sentences.
pub const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "pomee de terra 5kg bio",
        r#"{"english_product": "potato", "english_attributes": ["5kg", "organic"], "french_product": "pomme de terre", "french_attributes": ["5kg", "bio"]}"#,
    ),
    (
        "then a huile d'oluve",
        r#"{"english_product": "tuna with olive oil", "english_attributes": [], "french_product": "thon à l'huile d'olive", "french_attributes": []}"#,
    ),
    (
        "organic apples 1kg",
        r#"{"english_product": "organic apples", "english_attributes": ["1kg"], "french_product": "pommes bio", "french_attributes": ["1kg"]}"#,
    ),
];

/// Build the user prompt: the few-shot block followed by the query verbatim.
///
/// An empty query is legal and passed through unchanged.
pub fn build_user_prompt(query: &str) -> String {
    let mut prompt = String::from("Here are some examples of how to perform the task:\n");

    for (example_query, example_json) in FEW_SHOT_EXAMPLES {
        prompt.push_str("---\n");
        prompt.push_str(&format!("User Query: \"{example_query}\"\n"));
        prompt.push_str(&format!("JSON Response: {example_json}\n"));
    }
    prompt.push_str("---\n\n");

    prompt.push_str("Now, process the following query. Remember, respond with ONLY the JSON object.\n\n");
    prompt.push_str(&format!("User Query: \"{query}\"\n"));
    prompt.push_str("JSON Response:");

    prompt
}
