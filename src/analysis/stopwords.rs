use std::collections::HashSet;

/// Stop word list applied to surface forms during normalization.
pub struct StopWords {
    pub words: HashSet<String>,
}

impl StopWords {
    pub fn new(words: Vec<String>) -> Self {
        StopWords {
            words: words.into_iter().collect(),
        }
    }

    /// The standard 151-word Russian list used by the letter archive.
    pub fn russian() -> Self {
        let words = vec![
            "и", "в", "во", "не", "что", "он", "на", "я", "с", "со",
            "как", "а", "то", "все", "она", "так", "его", "но", "да",
            "ты", "к", "у", "же", "вы", "за", "бы", "по", "только",
            "ее", "мне", "было", "вот", "от", "меня", "еще", "нет",
            "о", "из", "ему", "теперь", "когда", "даже", "ну", "вдруг",
            "ли", "если", "уже", "или", "ни", "быть", "был", "него",
            "до", "вас", "нибудь", "опять", "уж", "вам", "ведь", "там",
            "потом", "себя", "ничего", "ей", "может", "они", "тут",
            "где", "есть", "надо", "ней", "для", "мы", "тебя", "их",
            "чем", "была", "сам", "чтоб", "без", "будто", "чего", "раз",
            "тоже", "себе", "под", "будет", "ж", "тогда", "кто", "этот",
            "того", "потому", "этого", "какой", "совсем", "ним",
            "здесь", "этом", "один", "почти", "мой", "тем", "чтобы",
            "нее", "сейчас", "были", "куда", "зачем", "всех", "никогда",
            "можно", "при", "наконец", "два", "об", "другой", "хоть",
            "после", "над", "больше", "тот", "через", "эти", "нас",
            "про", "всего", "них", "какая", "много", "разве", "три",
            "эту", "моя", "впрочем", "хорошо", "свою", "этой", "перед",
            "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им",
            "более", "всегда", "конечно", "всю", "между",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        StopWords::new(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_list() {
        let stops = StopWords::russian();
        assert_eq!(stops.len(), 151);
        assert!(stops.contains("и"));
        assert!(stops.contains("не"));
        assert!(stops.contains("между"));
        assert!(!stops.contains("площадь"));
    }

    #[test]
    fn test_custom_list() {
        let stops = StopWords::new(vec!["foo".to_string()]);
        assert!(stops.contains("foo"));
        assert!(!stops.contains("bar"));
    }
}
