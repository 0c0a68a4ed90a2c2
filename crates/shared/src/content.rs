//! Static marketing copy rendered by the landing pages.

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::domain::Route;

pub const BRAND_NAME: &str = "QuizMaster";
pub const BRAND_MARK: &str = "Q";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeroCopy {
    pub tagline: &'static str,
    pub headline_lead: &'static str,
    pub headline_brand: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    tagline: "Master knowledge through intelligent quizzing",
    headline_lead: "Elevate your learning with",
    headline_brand: BRAND_NAME,
    description: "The intelligent quiz platform designed with precision to help you master any subject through adaptive learning and thoughtful assessment.",
    primary_cta: "Get Started",
    secondary_cta: "Login",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub glyph: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        glyph: "📖",
        value: "100+",
        label: "Subjects",
    },
    Stat {
        glyph: "👥",
        value: "50,000+",
        label: "Users",
    },
    Stat {
        glyph: "🏆",
        value: "1M+",
        label: "Quizzes Taken",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionHeading {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const FEATURES_HEADING: SectionHeading = SectionHeading {
    badge: "Core Capabilities",
    title: "Designed with precision for learning excellence",
    subtitle: "Every feature in QuizMaster has been thoughtfully crafted to enhance your learning experience and help you achieve mastery in your subjects.",
};

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    badge: "Success Stories",
    title: "Hear from our community",
    subtitle: "Discover how QuizMaster has helped students and educators enhance their learning and teaching experience.",
};

pub const ABOUT_HEADING: SectionHeading = SectionHeading {
    badge: "About Us",
    title: "Built to make mastery measurable",
    subtitle: "QuizMaster began as a study tool for a handful of students and grew into a platform trusted by learners and educators who want practice that adapts to them.",
};

pub const ABOUT_PRINCIPLES: [&str; 3] = [
    "Practice should adapt to the learner, not the other way around.",
    "Progress is only useful when it is visible and honest.",
    "A calm, focused interface keeps attention on the material.",
];

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    badge: "Contact",
    title: "We'd love to hear from you",
    subtitle: "Questions about courses, accounts or partnerships? Reach the team through any of the channels below.",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        glyph: "🎓",
        title: "Adaptive Learning",
        description: "Our intelligent system adapts to your learning patterns, focusing on areas where you need more practice.",
    },
    Feature {
        glyph: "📚",
        title: "Extensive Library",
        description: "Access a wide range of subjects and chapters, meticulously organized for efficient study sessions.",
    },
    Feature {
        glyph: "📊",
        title: "Detailed Analytics",
        description: "Track your progress with comprehensive analytics that highlight strengths and improvement areas.",
    },
    Feature {
        glyph: "🛡",
        title: "Secure Platform",
        description: "Your learning data is protected with enterprise-grade security, ensuring privacy and compliance.",
    },
    Feature {
        glyph: "⏱",
        title: "Timed Quizzes",
        description: "Practice under exam-like conditions with customizable time limits for better preparation.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub content: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter(|part| !part.ends_with('.'))
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        content: "QuizMaster has completely transformed how I prepare for my exams. The adaptive question system helped me focus on weak areas I didn't even know I had.",
        author: "Sarah Johnson",
        role: "Medical Student",
    },
    Testimonial {
        content: "As a professor, I've found QuizMaster to be an invaluable tool for my students. The analytics help me understand where my class needs additional instruction.",
        author: "Dr. Michael Chen",
        role: "University Professor",
    },
    Testimonial {
        content: "The interface is so intuitive and clean that studying doesn't feel like a chore anymore. I can focus entirely on the content rather than figuring out the platform.",
        author: "Alex Rodriguez",
        role: "Computer Science Major",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

pub fn primary_nav() -> [NavLink; 4] {
    [
        NavLink {
            route: Route::Home,
            label: "Home",
        },
        NavLink {
            route: Route::Features,
            label: "Features",
        },
        NavLink {
            route: Route::About,
            label: "About",
        },
        NavLink {
            route: Route::Contact,
            label: "Contact",
        },
    ]
}

/// Footer links point at paths rather than routes; several (help, faq, blog)
/// have no page and resolve to the not-found view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterLink {
    pub path: &'static str,
    pub label: &'static str,
}

impl FooterLink {
    pub fn route(&self) -> Route {
        Route::parse(self.path)
    }
}

pub const FOOTER_TAGLINE: &str = "The intelligent quiz platform designed with precision to help you master any subject through adaptive learning.";

pub const FOOTER_QUICK_LINKS: [FooterLink; 6] = [
    FooterLink {
        path: "/",
        label: "Home",
    },
    FooterLink {
        path: "/features",
        label: "Features",
    },
    FooterLink {
        path: "/about",
        label: "About Us",
    },
    FooterLink {
        path: "/contact",
        label: "Contact",
    },
    FooterLink {
        path: "/login",
        label: "Login",
    },
    FooterLink {
        path: "/register",
        label: "Sign Up",
    },
];

pub const FOOTER_RESOURCES: [FooterLink; 5] = [
    FooterLink {
        path: "/help",
        label: "Help Center",
    },
    FooterLink {
        path: "/faq",
        label: "FAQ",
    },
    FooterLink {
        path: "/privacy",
        label: "Privacy Policy",
    },
    FooterLink {
        path: "/terms",
        label: "Terms of Service",
    },
    FooterLink {
        path: "/blog",
        label: "Blog",
    },
];

pub const FOOTER_LEGAL: [FooterLink; 3] = [
    FooterLink {
        path: "/privacy",
        label: "Privacy Policy",
    },
    FooterLink {
        path: "/terms",
        label: "Terms of Service",
    },
    FooterLink {
        path: "/cookies",
        label: "Cookie Policy",
    },
];

pub const SOCIAL_LINKS: [&str; 4] = ["Twitter", "Facebook", "Instagram", "LinkedIn"];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    email: "support@quizmaster.com",
    phone: "+1 (555) 123-4567",
    address: "123 Learning Street, Knowledge City, 90210",
};

pub fn copyright_line_for_year(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

pub fn copyright_line() -> String {
    copyright_line_for_year(Local::now().year())
}
