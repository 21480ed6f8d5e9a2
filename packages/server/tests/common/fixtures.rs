//! Shared request texts.

/// Three sentences; the two about the cat are the most central.
pub const CAT_DOG_TEXT: &str = "A cat sat. A cat ran. The dog slept.";

/// No terminal punctuation at all.
pub const SINGLE_SENTENCE_TEXT: &str = "Only one sentence here";

/// Enough sentences that every `extractive_k` below 6 forces ranking.
pub const NEWS_TEXT: &str = "The city council approved the new transit budget on Monday. \
    Council members debated the transit budget for three hours. \
    A local bakery celebrated its tenth anniversary. \
    The transit budget adds two bus routes and extends train hours. \
    Weather forecasters expect rain later this week. \
    Residents praised the council for expanding transit service.";
