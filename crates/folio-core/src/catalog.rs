//! Built-in portfolio content.
//!
//! Declaration order here is the order every listing, slug enumeration and
//! carousel uses.

use crate::content::{ExternalLink, Project, WritingPost};

fn stack(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn links(items: &[(&str, &str)]) -> Vec<ExternalLink> {
    items
        .iter()
        .map(|(label, url)| ExternalLink::new(*label, *url))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    slug: &str,
    title: &str,
    role: &str,
    timeframe: &str,
    tech: &[&str],
    [problem, approach, outcomes, impact]: [&str; 4],
    link_list: &[(&str, &str)],
    featured: bool,
) -> Project {
    Project {
        slug: slug.to_string(),
        title: title.to_string(),
        role: role.to_string(),
        timeframe: timeframe.to_string(),
        stack: stack(tech),
        problem: problem.to_string(),
        approach: approach.to_string(),
        outcomes: outcomes.to_string(),
        impact: impact.to_string(),
        reel: None,
        three: None,
        links: links(link_list),
        featured,
    }
}

/// Every project, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        skin_disease_detection(),
        environmental_data_analysis(),
        robot_fish(),
        alpha(),
        beta(),
        gamma(),
        delta(),
        epsilon(),
        zeta(),
        eta(),
        theta(),
    ]
}

/// Every writing post, in display order.
pub fn writing_posts() -> Vec<WritingPost> {
    vec![post_typography(), post_a11y()]
}

fn skin_disease_detection() -> Project {
    project(
        "skin-disease-detection",
        "Skin Disease Detection",
        "Full Stack Engineer",
        "2025",
        &["TensorFlow", "Keras", "MobileNetV2", "Python", "React"],
        [
            "Dermatological conditions require quick and accurate diagnosis, which can be slow or inaccessible in some regions.",
            "Engineered a CNN-based image classification model trained on 5,000+ dermatology images using Transfer Learning (MobileNetV2).",
            "Achieved 89% validation accuracy across 4 conditions and reduced diagnostic review time by 70%.",
            "Demonstrated potential for accessible AI-driven healthcare diagnostics.",
        ],
        &[
            ("Live Demo", "https://dermavision-12-sci-k.vercel.app"),
            ("GitHub", "https://github.com/batman-is-dark"),
        ],
        true,
    )
}

fn environmental_data_analysis() -> Project {
    project(
        "environmental-data-analysis",
        "Environmental Data Analysis",
        "Data Analyst",
        "2025",
        &["Python", "Pandas", "NLTK", "Power BI", "PRAW"],
        [
            "Understanding public sentiment on environmental topics requires analyzing vast amounts of unstructured social media data.",
            "Developed an automated pipeline to scrape and clean 10,000+ Reddit posts, applying NLP for sentiment classification.",
            "Achieved 87% classification accuracy and visualized trends via an interactive Power BI dashboard.",
            "Won 3rd Place at TechFest 2025; insights viewed by 150+ attendees.",
        ],
        &[("GitHub", "https://github.com/batman-is-dark")],
        true,
    )
}

fn robot_fish() -> Project {
    project(
        "robot-fish",
        "Autonomous Robot Fish",
        "Circuit Design Engineer",
        "2025",
        &["Arduino", "C++", "Robotics", "Circuit Design"],
        [
            "Ocean plastic pollution requires innovative, autonomous cleanup solutions.",
            "Led circuit design and logic for a robotic fish prototype, optimizing response time by 25% and guiding a 3-member team.",
            "Prototype demonstrated 95% plastic collection efficiency in tank tests.",
            "Nominated for Best Innovation Award at Innovista; delivered prototype in just 2 weeks.",
        ],
        &[],
        true,
    )
}

fn alpha() -> Project {
    project(
        "alpha",
        "Design Tokens Pipeline",
        "Lead Engineer",
        "2024",
        &["TypeScript", "Next.js", "Zod"],
        [
            "Teams themed products independently, causing drift and duplication.",
            "Introduced a schema-validated token source and automated distribution to apps.",
            "Single source of truth for tokens with CI checks.",
            "Reduced theme regressions and accelerated rollout of brand updates.",
        ],
        &[
            ("Overview", "https://example.com/tokens-pipeline"),
            ("Repository", "https://github.com/example/tokens-pipeline"),
        ],
        true,
    )
}

fn beta() -> Project {
    project(
        "beta",
        "Performance Budget CI",
        "Engineer",
        "2023",
        &["TypeScript", "Lighthouse", "GitHub Actions"],
        [
            "Pages grew heavier over time without visibility, risking LCP and CLS regressions.",
            "Added CI checks using Lighthouse CI with budgets and PR annotations for deltas.",
            "Consistent performance baselines with automated guardrails on each PR.",
            "Kept core pages under budget and prevented regressions from reaching production.",
        ],
        &[
            ("Overview", "https://example.com/perf-budget-ci"),
            ("Repository", "https://github.com/example/perf-budget-ci"),
        ],
        false,
    )
}

fn gamma() -> Project {
    project(
        "gamma",
        "Design System Audit Toolkit",
        "Engineer",
        "2022",
        &["TypeScript", "Node.js", "CLI"],
        [
            "Legacy apps drifted from the design system with no objective way to quantify gaps.",
            "Built a CLI to scan codebases for token and component usage, generating actionable reports.",
            "Clear adoption metrics and prioritized backlogs per team.",
            "Improved consistency and reduced UI maintenance overhead.",
        ],
        &[
            ("Overview", "https://example.com/ds-audit"),
            ("Repository", "https://github.com/example/ds-audit"),
        ],
        false,
    )
}

fn delta() -> Project {
    project(
        "delta",
        "Image Classification Model",
        "ML Engineer",
        "2024",
        &["Python", "TensorFlow", "OpenCV", "FastAPI"],
        [
            "Medical imaging dataset lacked automated classification, requiring manual expert review for thousands of images.",
            "Built CNN-based classification model with transfer learning using ResNet50, achieving 94% accuracy on validation set.",
            "Reduced manual review time by 80% while maintaining diagnostic accuracy.",
            "Deployed API serving 10K+ predictions daily with <100ms latency.",
        ],
        &[
            ("Paper", "https://example.com/image-classification"),
            ("GitHub", "https://github.com/example/image-classifier"),
        ],
        true,
    )
}

fn epsilon() -> Project {
    project(
        "epsilon",
        "NLP Sentiment Analyzer",
        "Data Scientist",
        "2024",
        &["Python", "PyTorch", "BERT", "Hugging Face", "Docker"],
        [
            "E-commerce platform needed real-time sentiment analysis for customer reviews across multiple languages.",
            "Fine-tuned multilingual BERT model on 500K labeled reviews, implemented batch processing pipeline.",
            "91% accuracy on test set, processing 1M reviews/hour.",
            "Enabled automated review moderation and product insights dashboard used by 50+ teams.",
        ],
        &[
            ("Demo", "https://example.com/sentiment-demo"),
            ("Blog Post", "https://example.com/sentiment-blog"),
        ],
        true,
    )
}

fn zeta() -> Project {
    project(
        "zeta",
        "Time Series Forecasting System",
        "ML Engineer",
        "2023",
        &["Python", "Prophet", "LSTM", "Pandas", "Streamlit"],
        [
            "Supply chain team lacked accurate demand forecasting, leading to 30% inventory waste.",
            "Developed ensemble model combining Prophet and LSTM, capturing seasonal patterns and long-term trends.",
            "Reduced forecast error (MAPE) from 45% to 12% across 500+ SKUs.",
            "Saved $2M annually through optimized inventory management and reduced waste.",
        ],
        &[
            ("Case Study", "https://example.com/forecasting-case"),
            ("Dashboard", "https://example.com/forecasting-dash"),
        ],
        false,
    )
}

fn eta() -> Project {
    project(
        "eta",
        "Object Detection Pipeline",
        "Computer Vision Engineer",
        "2023",
        &["Python", "YOLOv8", "PyTorch", "OpenCV", "AWS"],
        [
            "Security system required real-time object detection for 100+ camera feeds with low latency.",
            "Optimized YOLOv8 model with quantization, deployed on edge devices with cloud fallback for complex scenes.",
            "Achieved 60 FPS processing with 88% mAP on custom dataset.",
            "Reduced false alarms by 75% and enabled automated threat detection across facilities.",
        ],
        &[
            ("Technical Report", "https://example.com/object-detection"),
            ("GitHub", "https://github.com/example/yolo-pipeline"),
        ],
        true,
    )
}

fn theta() -> Project {
    project(
        "theta",
        "Recommendation Engine",
        "ML Engineer",
        "2022",
        &["Python", "Scikit-learn", "Redis", "FastAPI", "PostgreSQL"],
        [
            "Content platform had 15% click-through rate on recommendations, users complained about irrelevant suggestions.",
            "Built hybrid recommender combining collaborative filtering and content-based features with real-time update pipeline.",
            "Increased CTR to 42% and average session time by 3.5 minutes.",
            "Generated 25% revenue increase through better content discovery and user retention.",
        ],
        &[
            ("Article", "https://example.com/recommendation-engine"),
            ("Presentation", "https://example.com/rec-slides"),
        ],
        false,
    )
}

fn post_typography() -> WritingPost {
    WritingPost {
        slug: "post-typography".to_string(),
        title: "Practical typography for design systems".to_string(),
        excerpt: "A minimalist type scale that maps cleanly to tokens without overfitting components."
            .to_string(),
        date_iso: "2025-11-04T00:00:00.000Z".to_string(),
        tags: stack(&["design-system", "typography"]),
        url: "https://example.com/writing/practical-typography".to_string(),
    }
}

fn post_a11y() -> WritingPost {
    WritingPost {
        slug: "post-a11y".to_string(),
        title: "Accessible motion defaults".to_string(),
        excerpt: "Respect reduced-motion while keeping UI responsive and intentional.".to_string(),
        date_iso: "2025-11-04T00:00:00.000Z".to_string(),
        tags: stack(&["accessibility", "motion"]),
        url: "https://example.com/writing/accessible-motion".to_string(),
    }
}
