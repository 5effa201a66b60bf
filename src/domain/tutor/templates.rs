//! Prompt templates for the tutoring tasks.
//!
//! Placeholders are filled by `InstructionTemplate::render`. Marker-based
//! tasks ask the model for the exact markers their extractor looks for.

use crate::domain::prompt::InstructionTemplate;

pub static GENERATE_TEXT: InstructionTemplate = InstructionTemplate::from_static(
    r#"Instructions:
Generate an original educational text for an English language learner about the topic below, written at the given proficiency level. Use vocabulary and sentence structures suited to that level. Do not repeat these instructions or the parameters, and do not add a title. Return only the text itself.

Parameters:
Topic: "{topic}"
Proficiency Level: {level_description}

Generated Text:
"#,
);

pub static DICTIONARY: InstructionTemplate = InstructionTemplate::from_static(
    r#"Provide a detailed dictionary entry for the English word or phrase "{word}". Include its pronunciation in IPA, its part(s) of speech, clear definitions for each main sense, two example sentences per sense, common synonyms and antonyms, and short usage notes a language learner would find helpful. Format the entry so it is easy to read."#,
);

pub static CORRECTION: InstructionTemplate = InstructionTemplate::from_static(
    r#"Act as an expert English proofreader and writing tutor. Correct the grammar, spelling, punctuation and word choice of the text below while keeping the author's meaning and voice. Then briefly explain the most important corrections.

Original Text:
---
{text}
---

Respond in exactly this format:

Corrected Text:
[the full corrected text]

Feedback:
* [explanation of one correction]
* [explanation of another correction]
"#,
);

pub static GRAMMAR_AID: InstructionTemplate = InstructionTemplate::from_static(
    r#"Explain the English grammar topic '{topic}' clearly for a language learner. Describe what it is, when it is used and how it is formed, point out common mistakes, and give several example sentences."#,
);

pub static ESSAY: InstructionTemplate = InstructionTemplate::from_static(
    r#"Write a well-structured {essay_type} essay on the topic: "{topic}".
Open with an introduction that states a clear thesis. Develop one main point per body paragraph with supporting evidence or examples, and finish with a conclusion that ties the essay together. Use clear academic English that an upper-intermediate learner can study as a model."#,
);

pub static ESSAY_OUTLINE: InstructionTemplate = InstructionTemplate::from_static(
    r#"Create a detailed outline for a {essay_type} essay on the topic: "{topic}".
Use numbered sections for the introduction (including a thesis statement), each body paragraph (main point and supporting ideas) and the conclusion. Do not write the full essay."#,
);

pub static PARAPHRASE: InstructionTemplate = InstructionTemplate::from_static(
    r#"Instructions:
Rephrase the text below in a {style} style. Keep the original meaning and return only the rephrased text.

Original Text:
---
{text}
---

Rephrased Text:
"#,
);

pub static SUMMARY: InstructionTemplate = InstructionTemplate::from_static(
    r#"Instructions:
Summarize the text below for an English language learner. Keep the key ideas, use clear and simple sentences, and return only the summary.

Original Text:
---
{text}
---

Summary:
"#,
);

pub static TRANSLATE_EXPLAIN: InstructionTemplate = InstructionTemplate::from_static(
    r#"Translate the text below into {target_language}. Then explain the idioms, grammar points and word choices a language learner should notice.

Text:
---
{text}
---

Respond in exactly this format:

Translation:
[the translation]

Explanation:
[the explanation]
"#,
);

pub static SCENARIO_OPENING: InstructionTemplate = InstructionTemplate::from_static(
    r#"You are an AI role-playing partner for English language practice. Start the following scenario. Adopt the role assigned to '{persona}' and provide an engaging opening line or question. Be concise and stay in character.

Scenario Description:
---
{scenario}
---

Your Opening Line/Question (as the assigned character):"#,
);

/// Framing placed before the history when a scenario continues.
pub static SCENARIO_FRAMING: InstructionTemplate = InstructionTemplate::from_static(
    r#"You are an AI role-playing partner continuing an English practice scenario. Maintain the character role assigned to '{persona}' based on the original scenario description provided below. Respond naturally to the user's latest message within the context of the ongoing conversation history. Stay in character and keep responses concise.

Original Scenario Description:
---
{scenario}
---

[Conversation History Starts Below]
"#,
);
