// Cross-cutting prompt fragments. Templates for user prompts live in the
// prompts module registry; system strings specific to one service live
// alongside that service.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for the content-analysis steps.
pub const RECRUITING_ANALYST_SYSTEM: &str = "You are an expert recruiting analyst \
    working inside an applicant sourcing product. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
