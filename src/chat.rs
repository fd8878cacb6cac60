//! Keyword-triggered canned replies for the help chat.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Loan,
    Return,
    Book,
    Fallback,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

// Checked top to bottom; the first rule with a matching keyword wins.
// Return sits above Book so "quero devolver um livro" is answered as a return.
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        keywords: &["ola", "oi", "olá", "bom dia"],
    },
    Rule {
        topic: Topic::Loan,
        keywords: &["emprestimo", "emprestar"],
    },
    Rule {
        topic: Topic::Return,
        keywords: &["devolver", "devolucao", "multa"],
    },
    Rule {
        topic: Topic::Book,
        keywords: &["livro", "acervo"],
    },
];

impl Topic {
    pub fn replies(self) -> &'static [&'static str] {
        match self {
            Self::Greeting => &["Olá! Como posso ajudar?", "Oi! Em que posso ajudar hoje?"],
            Self::Loan => &[
                "Para fazer um empréstimo, vá para a aba 'Empréstimos' e preencha os dados.",
                "O prazo padrão para empréstimos é de 15 dias.",
            ],
            Self::Return => &[
                "O prazo de devolução é de 15 dias com multa de R$3,00 por dia de atraso.",
                "Para devolver, clique no botão 'Devolver' na tabela de relatórios.",
            ],
            Self::Book => &[
                "Você pode cadastrar novos livros na aba 'Acervo'.",
                "Experimente nossa Busca Inteligente para encontrar livros!",
            ],
            Self::Fallback => &[
                "Desculpe, não entendi. Pode reformular?",
                "Interessante! Sobre qual aspecto você gostaria de saber mais?",
            ],
        }
    }
}

pub fn classify(message: &str) -> Topic {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
        .map_or(Topic::Fallback, |rule| rule.topic)
}

/// Pick one of the canned replies for the topic of `message`.
pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    let replies = classify(message).replies();
    replies.choose(rng).copied().unwrap_or_default()
}
