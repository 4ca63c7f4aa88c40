use super::category::Category;

/// Weight of an answer to an ordinary question
pub const NORMAL_WEIGHT: f64 = 1.0;
/// Weight of an answer to a question flagged as weighted
pub const WEIGHTED_WEIGHT: f64 = 1.5;

/// 1-based positions weighted in the reference bank
pub const DEFAULT_WEIGHTED_POSITIONS: [usize; 2] = [3, 10];

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOption {
    pub category: Category,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// 1-based position in the quiz
    pub position: usize,
    pub prompt: &'static str,
    pub options: Vec<QuizOption>,
    pub weighted: bool,
}

impl Question {
    pub fn weight(&self) -> f64 {
        if self.weighted {
            WEIGHTED_WEIGHT
        } else {
            NORMAL_WEIGHT
        }
    }

    /// Option offered for a category, if the question has one
    pub fn option_for(&self, category: Category) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.category == category)
    }
}

/// Ordered list of questions. Validate with
/// [`validate_question_bank`](super::validation::validate_question_bank)
/// before scoring against it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The ten-question reference quiz with positions 3 and 10 weighted
    pub fn reference() -> Self {
        Self::reference_with_weighted(&DEFAULT_WEIGHTED_POSITIONS)
    }

    /// Reference prompts with a custom set of weighted (1-based) positions.
    /// Positions outside the bank are ignored here; config validation reports them.
    pub fn reference_with_weighted(weighted_positions: &[usize]) -> Self {
        let questions = REFERENCE_QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, (prompt, texts))| {
                let position = i + 1;
                Question {
                    position,
                    prompt: *prompt,
                    options: Category::ALL
                        .iter()
                        .zip(texts.iter())
                        .map(|(category, text)| QuizOption {
                            category: *category,
                            text: *text,
                        })
                        .collect(),
                    weighted: weighted_positions.contains(&position),
                }
            })
            .collect();
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Weight applied to the answer at a 0-based index
    pub fn weight_at(&self, index: usize) -> f64 {
        self.questions
            .get(index)
            .map(Question::weight)
            .unwrap_or(NORMAL_WEIGHT)
    }

    /// 1-based positions of weighted questions
    pub fn weighted_positions(&self) -> Vec<usize> {
        self.questions
            .iter()
            .filter(|q| q.weighted)
            .map(|q| q.position)
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::reference()
    }
}

/// Prompts and option texts in category order a..f
static REFERENCE_QUESTIONS: [(&str, [&str; 6]); 10] = [
    (
        "In school, which subject do you find the easiest or most interesting?",
        [
            "Maths, computers, or problem-solving",
            "Biology, environment, or health science",
            "Business studies, accounts, or economics",
            "Hindi, English, Social Science",
            "Drawing, music, or arts",
            "Workshop/practical, repairing, or using tools",
        ],
    ),
    (
        "When your friends need help, what do they usually ask you for?",
        [
            "Fixing a phone or solving a tricky puzzle",
            "Health tips or science project help",
            "Money-saving ideas or event budgeting",
            "Explaining something clearly or giving advice",
            "Creative help: art, design, or videos",
            "Repairing a cycle, chair, or gadget",
        ],
    ),
    (
        "Which activity excites you the most?",
        [
            "Coding, problem-solving, or building an app",
            "Caring for people/animals or doing science experiments",
            "Selling things, tracking expenses, or planning a business",
            "Teaching, mentoring, or leading a community program",
            "Designing posters, making videos, or performing on stage",
            "Building, repairing, or making things with your hands",
        ],
    ),
    (
        "Which workplace feels closest to your dream job?",
        [
            "Technology lab or computer office",
            "Hospital, clinic, or research lab",
            "Bank, corporate office, or your own shop",
            "School, NGO, or government office",
            "Design studio, music room, or art workshop",
            "Factory, farm, garage, or outdoors",
        ],
    ),
    (
        "What is most important for you in your future career?",
        [
            "Solving new and challenging problems",
            "Helping people stay healthy and safe",
            "Earning money and becoming independent",
            "Guiding or improving my community",
            "Expressing my creative ideas",
            "Making real things with my own skills",
        ],
    ),
    (
        "Which skill do you feel you are strongest in?",
        [
            "Logical thinking and math",
            "Carefulness and attention to detail",
            "Planning and organizing work or money",
            "Understanding and motivating people",
            "Drawing, acting, or storytelling",
            "Using tools or fixing things",
        ],
    ),
    (
        "Which path after school sounds most interesting to you?",
        [
            "Science, computers, or engineering",
            "Nursing, farming, or healthcare",
            "Business, finance, or entrepreneurship",
            "Teaching, law, or government services",
            "Arts, design, or media production",
            "Technical trades like electrician, mechanic, or chef",
        ],
    ),
    (
        "How do you prefer to learn new things?",
        [
            "Using computers or online videos",
            "Hands-on experiments in real life",
            "By running a project or managing resources",
            "By discussing and working in a group",
            "By creating or designing something",
            "By watching and copying skilled workers",
        ],
    ),
    (
        "In your family or village, what are you known for?",
        [
            "Helping with technology problems",
            "Caring for people or animals",
            "Managing money or business tasks",
            "Solving problems between people",
            "Creative talent: drawing, music, or dance",
            "Repairing or making useful things",
        ],
    ),
    (
        "What do you dream of creating in the future?",
        [
            "A useful app, machine, or tech invention",
            "A healthier and safer community",
            "A successful business or shop",
            "A fair and supportive society",
            "Creative work that inspires people",
            "A well-built product or service made by you",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bank_shape() {
        let bank = QuestionBank::reference();
        assert_eq!(bank.len(), 10);
        for (i, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.position, i + 1);
            assert_eq!(question.options.len(), 6);
        }
    }

    #[test]
    fn test_reference_weighted_positions() {
        let bank = QuestionBank::reference();
        assert_eq!(bank.weighted_positions(), vec![3, 10]);
        assert_eq!(bank.weight_at(2), WEIGHTED_WEIGHT);
        assert_eq!(bank.weight_at(9), WEIGHTED_WEIGHT);
        assert_eq!(bank.weight_at(0), NORMAL_WEIGHT);
    }

    #[test]
    fn test_custom_weighted_positions() {
        let bank = QuestionBank::reference_with_weighted(&[1]);
        assert_eq!(bank.weighted_positions(), vec![1]);
        assert_eq!(bank.weight_at(2), NORMAL_WEIGHT);
    }

    #[test]
    fn test_option_for_category() {
        let bank = QuestionBank::reference();
        let first = bank.get(0).unwrap();
        assert_eq!(
            first.option_for(Category::E).unwrap().text,
            "Drawing, music, or arts"
        );
    }
}
