use anyhow::{Result, anyhow};

use crate::ports::GeneratorPort;
use crate::transcript::{render_context, Message};

/// Fixed reply for general health inquiries. No generator call.
pub fn general_reply(symptom: &str) -> Message {
    Message::assistant(format!(
        "Based on what you've told me about '{}', this seems like a general health question. \
        I'm an AI assistant and not a medical professional. For any health concerns, it's always \
        best to consult with a doctor or a qualified healthcare provider. They can give you accurate advice.",
        symptom
    ))
}

/// Fixed reply for emergencies. No generator call.
pub fn emergency_reply(symptom: &str) -> Message {
    Message::assistant(format!(
        "Based on what you've described as '{}', this could be a medical emergency. \
        Please do not wait. Contact your local emergency services immediately (like calling 911 in the US, \
        112 in Europe, or 108 in India) or go to the nearest emergency room. \
        Your health is the top priority, and getting immediate help is crucial.",
        symptom
    ))
}

fn persona_prompt(transcript: &[Message], symptom: &str) -> String {
    format!(
        "You are 'Aura', a caring and empathetic mental health companion. Your goal is to provide a safe, \
        supportive, and non-judgmental space for the user. You are not a therapist, so you must not give \
        medical advice, diagnoses, or treatment plans. Instead, you should listen, offer comfort, and provide \
        helpful, safe, and general information. Always include a disclaimer in your first response that you \
        are an AI and not a substitute for professional help.\n\n\
        Here are your guidelines:\n\
        1. Be Empathetic: Start by acknowledging the user's feelings (e.g., 'It sounds like you're going through a lot,' 'Thank you for sharing that with me.').\n\
        2. Encourage Expression: Ask open-ended questions to help the user explore their feelings (e.g., 'How long have you been feeling this way?', 'Is there anything specific that has been on your mind?').\n\
        3. Offer General, Safe Coping Strategies: Suggest things like mindfulness, deep breathing exercises, journaling, or connecting with friends/family.\n\
        4. Provide Resources: If appropriate, suggest seeking professional help and provide information on how to find it.\n\
        5. Maintain a Calm and Gentle Tone: Use soft and reassuring language.\n\n\
        Current Conversation:\n{}\n\
        User's latest message: \"{}\"\n\n\
        Aura's Response:",
        render_context(transcript),
        symptom
    )
}

/// Companion reply for mental-health turns: one generator call with the full
/// transcript as context, raw reply passed through unmodified.
pub async fn mental_health_reply<G: GeneratorPort>(
    generator: &G,
    transcript: &[Message],
    symptom: &str,
) -> Result<Message> {
    let reply = generator.generate(&persona_prompt(transcript, symptom)).await?;
    if reply.trim().is_empty() {
        return Err(anyhow!("empty companion reply from generator"));
    }
    Ok(Message::assistant(reply))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_reply_embeds_symptom() {
        let msg = general_reply("I have a fever");
        assert!(msg.content.contains("'I have a fever'"));
        assert!(msg.content.contains("consult with a doctor"));
    }

    #[test]
    fn emergency_reply_lists_regional_numbers() {
        let msg = emergency_reply("I'm having chest pains");
        assert!(msg.content.contains("'I'm having chest pains'"));
        assert!(msg.content.contains("911"));
        assert!(msg.content.contains("112"));
        assert!(msg.content.contains("108"));
        assert!(msg.content.contains("do not wait"));
    }

    #[test]
    fn persona_prompt_carries_transcript_and_symptom() {
        let transcript = vec![
            Message::assistant("Hello! I'm Aura."),
            Message::user("I feel anxious and sad"),
        ];
        let prompt = persona_prompt(&transcript, "I feel anxious and sad");
        assert!(prompt.contains("You are 'Aura'"));
        assert!(prompt.contains("1. [Assistant]: Hello! I'm Aura."));
        assert!(prompt.contains("User's latest message: \"I feel anxious and sad\""));
    }
}
