//! Static program catalogs: recommended tools, study resources, practice
//! exercises, motivation quotes, and the demo leaderboard roster.

use crate::model::Program;

/// A recommended tool for a program, with a one-line reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRecommendation {
    pub name: &'static str,
    pub purpose: &'static str,
}

const fn tool(name: &'static str, purpose: &'static str) -> ToolRecommendation {
    ToolRecommendation { name, purpose }
}

/// Recommended tools for the given program, in catalog order.
#[must_use]
pub fn tools(program: Program) -> &'static [ToolRecommendation] {
    match program {
        Program::Ai => &const {
            [
                tool("GPT/DeepSeek", "Explanation & code"),
                tool("Kaggle", "Datasets & notebooks"),
                tool("Colab", "Free notebooks"),
            ]
        },
        Program::Ml => &const {
            [
                tool("Scikit-learn", "Classical ML"),
                tool("TensorFlow", "Deep Learning"),
                tool("Weights & Biases", "Experiment tracking"),
            ]
        },
        Program::BusinessAnalytics => &const {
            [
                tool("Power BI", "Dashboards"),
                tool("Tableau", "Viz"),
                tool("Excel", "Reporting"),
            ]
        },
        Program::Bba => &const {
            [
                tool("Excel", "Finance models"),
                tool("Notion", "Notes"),
                tool("Grammarly", "Writing"),
            ]
        },
        Program::DataAnalytics => &const {
            [
                tool("Pandas", "Data manipulation"),
                tool("SQL", "Queries"),
                tool("Plotly", "Interactive charts"),
            ]
        },
        Program::Robotics => &const {
            [
                tool("ROS/ROS2", "Middleware"),
                tool("Gazebo", "Simulation"),
                tool("OpenCV", "Vision"),
            ]
        },
        Program::Biotechnology => &const {
            [
                tool("Biopython", "Bioinformatics"),
                tool("NCBI/PubMed", "Research"),
                tool("BLAST", "Sequence search"),
            ]
        },
        Program::Agriculture => &const {
            [
                tool("GIS/QGIS", "Mapping"),
                tool("Remote sensing", "Crop monitoring"),
            ]
        },
        Program::Law => &const {
            [
                tool("Legal search", "Case lookup"),
                tool("Citation tools", "References"),
            ]
        },
        Program::HospitalManagement => &const {
            [
                tool("EMR/HIS", "Records"),
                tool("Power BI", "Operations dashboards"),
            ]
        },
        Program::DigitalMarketing => &const {
            [
                tool("Google Analytics", "Metrics"),
                tool("Meta Ads", "Ads optimization"),
            ]
        },
    }
}

/// Curated study resources; programs without entries get an empty list.
#[must_use]
pub fn resources(program: Program) -> &'static [&'static str] {
    match program {
        Program::Ai => &["fast.ai course", "DeepLearning.AI nanodegree"],
        Program::Ml => &["Hands-On ML book", "Scikit-learn docs"],
        Program::BusinessAnalytics => &["Power BI guide", "Kaggle BA datasets"],
        Program::Robotics => &["ROS tutorials", "Gazebo docs"],
        Program::DataAnalytics => &["SQL tutorials", "Pandas docs"],
        _ => &[],
    }
}

const PRACTICE_FALLBACK: &[&str] = &["Write one short note on your topic."];

/// Short-answer practice exercises for the program.
///
/// Programs without a dedicated bank fall back to a generic item so the
/// practice view is never empty.
#[must_use]
pub fn practice_exercises(program: Program) -> &'static [&'static str] {
    match program {
        Program::Ai => &[
            "Explain difference between AI & ML (2 lines).",
            "List 3 AI applications.",
        ],
        Program::Ml => &[
            "Write steps to split dataset for train/val/test.",
            "Explain bias vs variance.",
        ],
        Program::Robotics => &["Describe PID controller in 2 lines.", "What is SLAM?"],
        Program::BusinessAnalytics => &[
            "List five KPIs for an e-commerce store.",
            "Sketch a dashboard layout for sales.",
        ],
        Program::DataAnalytics => &[
            "Write a SQL query to get top 5 customers by revenue.",
            "Explain ETL pipeline.",
        ],
        _ => PRACTICE_FALLBACK,
    }
}

/// Daily motivation quotes shown on the home view.
pub const MOTIVATION: [&str; 4] = [
    "Small progress each day adds up to big results.",
    "Consistency > intensity — show up daily.",
    "Practice is how expertise is built.",
    "Mistakes are proof that you are trying.",
];

/// Display names filling out the demo leaderboard.
pub const DEMO_LEADERBOARD_NAMES: [&str; 6] =
    ["Soumya", "Vivek", "Satyam", "Alyssa", "Rohit", "Arman"];
