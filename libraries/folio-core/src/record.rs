//! The static portfolio record.
//!
//! Built once on first access and shared for the lifetime of the process.
//! Nothing in the crate exposes a way to mutate it.

use crate::types::{
    Award, Certification, EducationEntry, EntryId, ExperienceEntry, ExperienceKind, Patent,
    PortfolioRecord, Profile, ProjectCategory, ProjectEntry, Skills,
};
use std::sync::OnceLock;

static PORTFOLIO: OnceLock<PortfolioRecord> = OnceLock::new();

/// The portfolio record every section reads from
pub fn portfolio() -> &'static PortfolioRecord {
    PORTFOLIO.get_or_init(build)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn build() -> PortfolioRecord {
    PortfolioRecord {
        personal: profile(),
        education: education(),
        patents: patents(),
        experience: experience(),
        projects: projects(),
        skills: skills(),
        certifications: certifications(),
        awards: awards(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Likith Ganmarapu".to_string(),
        title: "AI Engineer & Computer Vision Specialist".to_string(),
        email: "se21uari076@mahindrauniversity.edu.in".to_string(),
        phone: "(+91)7674042832".to_string(),
        location: "Hyderabad, Telangana".to_string(),
        linkedin: "https://linkedin.com/in/likith-ganmarapu".to_string(),
        github: "https://github.com/likith1908".to_string(),
        bio: "Passionate AI Engineer specializing in Computer Vision and Machine Learning. \
              Currently pursuing B.Tech in Artificial Intelligence with hands-on experience \
              in developing innovative solutions using cutting-edge technologies."
            .to_string(),
        availability: "Available for full-time opportunities".to_string(),
    }
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            id: EntryId::new("edu-1"),
            institution: "Mahindra University".to_string(),
            degree: "Bachelor of Technology in Artificial Intelligence".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "Aug 2021 – Jun 2025".to_string(),
            score: "8.02".to_string(),
            status: Some("Current".to_string()),
        },
        EducationEntry {
            id: EntryId::new("edu-2"),
            institution: "Sri Chaitanya Junior Kalasala".to_string(),
            degree: "Intermediate (PCM)".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "Jun 2019 – Mar 2021".to_string(),
            score: "98.6%".to_string(),
            status: None,
        },
        EducationEntry {
            id: EntryId::new("edu-3"),
            institution: "Sri Chaitanya Techno School".to_string(),
            degree: "10th Grade (SSC)".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "May 2018 – Jun 2019".to_string(),
            score: "9.8".to_string(),
            status: None,
        },
    ]
}

fn patents() -> Vec<Patent> {
    vec![Patent {
        id: EntryId::new("patent-1"),
        title: "Automated Short News Video Generation".to_string(),
        patent_number: "IN Patent 20244110586874".to_string(),
        publish_date: "August 5, 2024".to_string(),
        description: "Revolutionary system for automated generation of short news videos \
                      using AI and machine learning technologies"
            .to_string(),
    }]
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: EntryId::new("exp-1"),
            position: "Associate Engineer - AI (Intern)".to_string(),
            company: "AuroPro Sys Systems".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "Jan 2025 – Present".to_string(),
            kind: ExperienceKind::Internship,
            achievements: strings(&[
                "Digitized printed and handwritten documents using TOCR and GOT \
                 (transformer-based) models, achieving 97% accuracy",
                "Developed a software solution for end-to-end analysis of bank statements \
                 and credit reports for microfinance evaluation using Generative AI and LLM's",
            ]),
        },
        ExperienceEntry {
            id: EntryId::new("exp-2"),
            position: "Computer Vision Intern".to_string(),
            company: "HarvestX Robotics".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "Jun 2024 – Oct 2024".to_string(),
            kind: ExperienceKind::Internship,
            achievements: strings(&[
                "Developed and implemented object detection and tracking algorithms using \
                 computer vision techniques",
                "Performed speed estimation and trained object detection models on custom \
                 datasets for accurate object detection",
                "Utilized machine vision systems for real-time image acquisition and analysis",
                "Integrated a laser gimbal system to target and shoot detected objects, \
                 enhancing automation capabilities",
            ]),
        },
        ExperienceEntry {
            id: EntryId::new("exp-3"),
            position: "Head of the Media Club".to_string(),
            company: "Mahindra University".to_string(),
            location: "Hyderabad, Telangana".to_string(),
            duration: "Aug 2023 – Mar 2024".to_string(),
            kind: ExperienceKind::Leadership,
            achievements: strings(&[
                "Led the official photography club of Mahindra University, managing a \
                 diverse team of 40+ members across departments",
                "Oversaw planning & shooting of media coverage for major campus events, \
                 conferences, and promotional activities",
                "Handled & maintained equipment worth over Rs.50 lakh, ensuring availability \
                 and operational readiness for events",
                "Led cross-functional media teams, managed equipment logistics, and improved \
                 operational workflows for high-visibility university events",
            ]),
        },
    ]
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: EntryId::new("proj-1"),
            title: "Quantum Machine Learning for Image Classification".to_string(),
            duration: "Sept 2024 – Nov 2024".to_string(),
            category: ProjectCategory::Research,
            description: "Implemented a Quantum Machine Learning (QML) model to perform image \
                          classification tasks, using a JetRacer platform for real-world \
                          deployment and testing."
                .to_string(),
            technologies: strings(&["Quantum Computing", "Machine Learning", "Python", "Qiskit"]),
            achievements: strings(&[
                "Compared the performance of QML models against classical machine learning \
                 models to evaluate the efficacy of quantum approaches",
            ]),
            featured: true,
        },
        ProjectEntry {
            id: EntryId::new("proj-2"),
            title: "Automated Short News Video Production System".to_string(),
            duration: "Feb 2024 – Jun 2024".to_string(),
            category: ProjectCategory::AiMl,
            description: "Developed an automated system for producing short news videos, \
                          integrating an Embedded Hardware Device (EHD) with a camera and a \
                          cloud-based server to streamline video production for social media \
                          platforms."
                .to_string(),
            technologies: strings(&[
                "Python",
                "AI/ML",
                "Raspberry Pi",
                "Computer Vision",
                "NLP",
            ]),
            achievements: strings(&[
                "Designed the EHD for real-time video capture and upload, enabling seamless \
                 content creation with minimal manual intervention using a Raspberry Pi",
            ]),
            featured: true,
        },
        ProjectEntry {
            id: EntryId::new("proj-3"),
            title: "Analysis of Earthquake Data".to_string(),
            duration: "Feb 2023 – Jun 2023".to_string(),
            category: ProjectCategory::DataScience,
            description: "Collected seismic data from the PEER Ground Motion Database and \
                          processed it using SeismoSoft for detailed analysis."
                .to_string(),
            technologies: strings(&[
                "Python",
                "Machine Learning",
                "Data Analysis",
                "SeismoSoft",
            ]),
            achievements: strings(&[
                "Refined the dataset and developed a machine learning model to perform \
                 earthquakes classification task",
            ]),
            featured: false,
        },
    ]
}

fn skills() -> Skills {
    Skills {
        languages: strings(&["Python", "C", "SQL", "FastAPI", "Flask"]),
        developer_tools: strings(&["Git", "Google Colab", "VS Code", "Postman", "Swagger"]),
        libraries: strings(&[
            "pandas",
            "NumPy",
            "Matplotlib",
            "scikit-learn",
            "supervision",
            "OpenCV",
        ]),
        cloud_infrastructure: strings(&["Docker", "GCP", "AWS (beginner)"]),
        hardware: strings(&["Raspberry Pi", "NVIDIA Jetson"]),
    }
}

fn certifications() -> Vec<Certification> {
    vec![Certification {
        id: EntryId::new("cert-1"),
        title: "Hugging Face Agents Course".to_string(),
        issuer: "Hugging Face Instructors".to_string(),
        date: "Apr 2025".to_string(),
        description: "Successfully completed coursework on building and deploying \
                      multi-modal AI agents using Hugging Face tools"
            .to_string(),
    }]
}

fn awards() -> Vec<Award> {
    vec![
        Award {
            id: EntryId::new("award-1"),
            title: "Merit-based Scholarship".to_string(),
            description: "Consecutively for two academic years (2021-22, 2022-23)".to_string(),
            year: "2021-2023".to_string(),
        },
        Award {
            id: EntryId::new("award-2"),
            title: "Aptitude Talent Search Olympiad (INTSO)".to_string(),
            description: "Achieved All India Rank 5".to_string(),
            year: "2015-2016".to_string(),
        },
        Award {
            id: EntryId::new("award-3"),
            title: "AMTI National Mathematics Talent Contest".to_string(),
            description: "Qualified and ranked in the top 10% nationally in 2014 and 2015"
                .to_string(),
            year: "2014-2015".to_string(),
        },
        Award {
            id: EntryId::new("award-4"),
            title: "International Mathematics Olympiad".to_string(),
            description: "Secured Rank 12 in Telangana & AP".to_string(),
            year: "2014".to_string(),
        },
    ]
}
