//! The static question bank: a shared base pool plus per-program seed
//! questions guaranteed to open that program's quiz.

use studyhub_core::model::{Program, Question};

struct BankEntry {
    prompt: &'static str,
    options: [&'static str; 4],
    answer: &'static str,
}

const fn entry(
    prompt: &'static str,
    options: [&'static str; 4],
    answer: &'static str,
) -> BankEntry {
    BankEntry {
        prompt,
        options,
        answer,
    }
}

const BASE_POOL: [BankEntry; 10] = [
    entry(
        "Which library is commonly used for data analysis in Python?",
        ["pandas", "NumPy", "Matplotlib", "Flask"],
        "pandas",
    ),
    entry(
        "Which tool is popular for BI dashboards?",
        ["Power BI", "Git", "Linux", "Docker"],
        "Power BI",
    ),
    entry(
        "What does ETL stand for?",
        [
            "Extract Transform Load",
            "Enter Test Leave",
            "Edit Transfer Log",
            "None",
        ],
        "Extract Transform Load",
    ),
    entry(
        "Which is a supervised learning algorithm?",
        ["K-Means", "Linear Regression", "DBSCAN", "PCA"],
        "Linear Regression",
    ),
    entry(
        "Which library is used for computer vision tasks?",
        ["OpenCV", "pandas", "Flask", "Requests"],
        "OpenCV",
    ),
    entry(
        "SLAM stands for?",
        [
            "Simultaneous Localization and Mapping",
            "Single Loc And Map",
            "Source Local Area Map",
            "None",
        ],
        "Simultaneous Localization and Mapping",
    ),
    entry(
        "Which cloud provider is common?",
        ["AWS", "Pandas", "NumPy", "Scikit"],
        "AWS",
    ),
    entry(
        "Which file format is common for data?",
        ["CSV", "PNG", "MP3", "EXE"],
        "CSV",
    ),
    entry(
        "Which is used for experiment tracking?",
        ["Weights & Biases", "VSCode", "Excel", "PowerPoint"],
        "Weights & Biases",
    ),
    entry(
        "Which is a deep learning framework?",
        ["TensorFlow", "Excel", "PowerPoint", "Word"],
        "TensorFlow",
    ),
];

fn program_entries(program: Program) -> &'static [BankEntry] {
    match program {
        Program::Ai => &const {
            [entry(
                "Which model family is from OpenAI?",
                ["GPT-4", "BERT", "ResNet", "AlexNet"],
                "GPT-4",
            )]
        },
        Program::Ml => &const {
            [entry(
                "Which algorithm is best for classification?",
                ["Linear Regression", "Logistic Regression", "PCA", "KNN"],
                "Logistic Regression",
            )]
        },
        Program::BusinessAnalytics => &const {
            [entry(
                "Which metric is KPI?",
                [
                    "Key Performance Indicator",
                    "Key Program Interface",
                    "Kernel Process Input",
                    "None",
                ],
                "Key Performance Indicator",
            )]
        },
        Program::DataAnalytics => &const {
            [entry(
                "Which SQL clause filters rows?",
                ["WHERE", "GROUP BY", "ORDER BY", "HAVING"],
                "WHERE",
            )]
        },
        Program::Robotics => &const {
            [entry(
                "Which sensor measures distance?",
                ["Lidar", "Microphone", "Thermometer", "GPS"],
                "Lidar",
            )]
        },
        Program::DigitalMarketing => &const {
            [entry(
                "What is SEO?",
                [
                    "Search Engine Optimization",
                    "Simple Email Output",
                    "Software Engineering Option",
                    "None",
                ],
                "Search Engine Optimization",
            )]
        },
        _ => &[],
    }
}

// The tables above are checked by the tests below, so materializing them
// cannot fail at runtime.
fn materialize(entry: &BankEntry) -> Question {
    Question::new(
        entry.prompt,
        entry.options.iter().map(ToString::to_string).collect(),
        entry.answer,
    )
    .expect("static question bank entries are valid")
}

/// The shared, program-agnostic filler pool.
#[must_use]
pub fn base_pool() -> Vec<Question> {
    BASE_POOL.iter().map(materialize).collect()
}

/// Program-specific questions that open that program's quiz, in defined
/// order. Programs without seeds get an empty list.
#[must_use]
pub fn seed_questions(program: Program) -> Vec<Question> {
    program_entries(program).iter().map(materialize).collect()
}
