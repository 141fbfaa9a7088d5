//! Fixed question and career-profile catalogs.
//!
//! Both tables are compiled in and never mutated; there is no reload path.

use crate::models::assessment::{CareerProfile, Category, Question};

/// The 20-question assessment, served in this order.
static QUESTIONS: [Question; 20] = [
    Question {
        id: 1,
        text: "I enjoy working with tools, machines, or equipment to build or fix things.",
        category: Category::Realistic,
        subcategory: "Interests",
    },
    Question {
        id: 2,
        text: "I prefer hands-on work over working at a desk with paperwork.",
        category: Category::Realistic,
        subcategory: "Interests",
    },
    Question {
        id: 3,
        text: "I like solving complex problems and conducting research.",
        category: Category::Investigative,
        subcategory: "Interests",
    },
    Question {
        id: 4,
        text: "I enjoy analyzing data and discovering patterns.",
        category: Category::Investigative,
        subcategory: "Interests",
    },
    Question {
        id: 5,
        text: "I express myself through creative activities like art, music, or writing.",
        category: Category::Artistic,
        subcategory: "Interests",
    },
    Question {
        id: 6,
        text: "I enjoy designing or creating original content.",
        category: Category::Artistic,
        subcategory: "Interests",
    },
    Question {
        id: 7,
        text: "I like helping people and making a positive impact on their lives.",
        category: Category::Social,
        subcategory: "Interests",
    },
    Question {
        id: 8,
        text: "I enjoy teaching, counseling, or working in teams.",
        category: Category::Social,
        subcategory: "Interests",
    },
    Question {
        id: 9,
        text: "I like leading projects and making important decisions.",
        category: Category::Enterprising,
        subcategory: "Interests",
    },
    Question {
        id: 10,
        text: "I am comfortable with persuading or influencing others.",
        category: Category::Enterprising,
        subcategory: "Interests",
    },
    Question {
        id: 11,
        text: "I prefer organized, structured work with clear procedures.",
        category: Category::Conventional,
        subcategory: "Work Style",
    },
    Question {
        id: 12,
        text: "I pay close attention to details and accuracy.",
        category: Category::Conventional,
        subcategory: "Work Style",
    },
    Question {
        id: 13,
        text: "I am energized by meeting new people and social interactions.",
        category: Category::Extraversion,
        subcategory: "Personality",
    },
    Question {
        id: 14,
        text: "I feel comfortable speaking in front of large groups.",
        category: Category::Extraversion,
        subcategory: "Personality",
    },
    Question {
        id: 15,
        text: "I prefer working independently rather than in groups.",
        category: Category::Introversion,
        subcategory: "Personality",
    },
    Question {
        id: 16,
        text: "I am comfortable working with uncertainty and adapting to change.",
        category: Category::Openness,
        subcategory: "Personality",
    },
    Question {
        id: 17,
        text: "I enjoy learning new technologies and methods.",
        category: Category::Openness,
        subcategory: "Skills",
    },
    Question {
        id: 18,
        text: "I am good at managing my time and staying organized.",
        category: Category::Conscientiousness,
        subcategory: "Skills",
    },
    Question {
        id: 19,
        text: "I remain calm under pressure and meet deadlines consistently.",
        category: Category::Conscientiousness,
        subcategory: "Skills",
    },
    Question {
        id: 20,
        text: "I value work-life balance and flexible working conditions.",
        category: Category::WorkValues,
        subcategory: "Values",
    },
];

/// Career profiles in match-evaluation order. The two-pass matcher and the
/// fallback fill both walk this order.
static PROFILES: [CareerProfile; 5] = [
    CareerProfile {
        title: "The Innovator",
        description: "You thrive on creativity and problem-solving. You're drawn to \
                      cutting-edge technologies and original thinking.",
        traits: &["Creative", "Analytical", "Open to Experience", "Independent"],
        sample_careers: &[
            "Software Developer",
            "Data Scientist",
            "Product Designer",
            "Research Scientist",
            "Entrepreneur",
        ],
        primary_categories: &[
            Category::Investigative,
            Category::Artistic,
            Category::Openness,
        ],
    },
    CareerProfile {
        title: "The Builder",
        description: "You excel at hands-on work and creating tangible results. You \
                      prefer practical solutions and working with tools or technology.",
        traits: &["Practical", "Detail-oriented", "Technical", "Problem-solver"],
        sample_careers: &[
            "Engineer",
            "Architect",
            "Mechanic",
            "Electrician",
            "Construction Manager",
        ],
        primary_categories: &[Category::Realistic, Category::Conventional],
    },
    CareerProfile {
        title: "The Helper",
        description: "You're passionate about making a difference in people's lives. \
                      You excel in supportive, collaborative environments.",
        traits: &["Empathetic", "Communicative", "Patient", "Team-oriented"],
        sample_careers: &[
            "Teacher",
            "Nurse",
            "Counselor",
            "Social Worker",
            "Human Resources Specialist",
        ],
        primary_categories: &[Category::Social, Category::Extraversion],
    },
    CareerProfile {
        title: "The Leader",
        description: "You have strong organizational and persuasive skills. You thrive \
                      in dynamic environments and enjoy taking charge.",
        traits: &["Confident", "Decisive", "Strategic", "Influential"],
        sample_careers: &[
            "Business Manager",
            "Marketing Director",
            "Sales Executive",
            "Project Manager",
            "CEO",
        ],
        primary_categories: &[Category::Enterprising, Category::Extraversion],
    },
    CareerProfile {
        title: "The Analyst",
        description: "You excel at working with data, systems, and structured \
                      processes. You value accuracy and logical thinking.",
        traits: &["Logical", "Organized", "Methodical", "Precise"],
        sample_careers: &[
            "Accountant",
            "Financial Analyst",
            "Data Analyst",
            "Operations Manager",
            "Quality Assurance Specialist",
        ],
        primary_categories: &[
            Category::Conventional,
            Category::Investigative,
            Category::Conscientiousness,
        ],
    },
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question_by_id(id: i32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

pub fn profiles() -> &'static [CareerProfile] {
    &PROFILES
}

/// Strength label for a category. Only the six interest categories carry a
/// label; the personality/work-style categories return `None` and drop out
/// of the top-strengths list.
pub fn strength_label(category: Category) -> Option<&'static str> {
    match category {
        Category::Realistic => Some("Hands-on Problem Solving"),
        Category::Investigative => Some("Analytical Thinking"),
        Category::Artistic => Some("Creative Expression"),
        Category::Social => Some("Interpersonal Skills"),
        Category::Enterprising => Some("Leadership & Initiative"),
        Category::Conventional => Some("Organization & Attention to Detail"),
        _ => None,
    }
}
