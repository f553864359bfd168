//! System-prompt composition for the professional-reply generator.

use crate::types::NormalizedRequest;

/// Compose the system-role prompt sent alongside the raw customer message.
///
/// The prompt instructs the model to act as a virtual assistant with the
/// requested tone, specialized in the requested category, and embeds the
/// customer message verbatim and quoted.
pub fn compose_system_prompt(request: &NormalizedRequest) -> String {
    format!(
        "Você é um assistente virtual com tom {} especializado em {}. \
         Crie uma resposta clara, simpática e profissional para a seguinte mensagem de um cliente:\n\n\
         Mensagem do cliente: \"{}\"\n\n\
         Responda de forma direta e eficaz.",
        request.tom, request.tipo, request.mensagem
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mensagem: &str, tom: &str, tipo: &str) -> NormalizedRequest {
        NormalizedRequest {
            mensagem: mensagem.to_string(),
            tom: tom.to_string(),
            tipo: tipo.to_string(),
        }
    }

    #[test]
    fn test_prompt_reflects_tone_and_category() {
        let prompt = compose_system_prompt(&request("oi", "formal", "orçamento"));
        assert!(prompt.contains("com tom formal"));
        assert!(prompt.contains("especializado em orçamento"));
    }

    #[test]
    fn test_prompt_quotes_message_verbatim() {
        let prompt = compose_system_prompt(&request("Qual o prazo de entrega?", "profissional", "resposta"));
        assert!(prompt.contains("Mensagem do cliente: \"Qual o prazo de entrega?\""));
    }
}
