//! Static optimization notes and the phased checklist shown next to the data.

use iced::Color;

use crate::theme::{GUIDE_GREEN, GUIDE_ORANGE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub topic: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideBody {
    Notes(&'static [Note]),
    Checklist(&'static [Phase]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub title: &'static str,
    pub accent: Color,
    pub body: GuideBody,
}

const fn note(topic: &'static str, detail: &'static str) -> Note {
    Note { topic, detail }
}

const NOTES: &[Note] = &[
    note(
        "Core Web Vitals",
        "LCP < 2.5s, FID < 100ms, CLS < 0.1 for good user experience",
    ),
    note(
        "Next.js Specific Optimizations",
        "Use Image component, dynamic imports, API routes optimization",
    ),
    note(
        "Bundle Analysis",
        "Run `npm run build` and analyze bundle sizes regularly",
    ),
    note(
        "Tailwind Purging",
        "Ensure unused CSS is purged in production builds",
    ),
    note(
        "Static Generation",
        "Use getStaticProps/getServerSideProps appropriately",
    ),
    note(
        "Image Optimization",
        "Implement Next.js Image component with proper sizing",
    ),
    note(
        "Code Splitting",
        "Use dynamic imports and lazy loading for heavy components",
    ),
    note(
        "Caching Strategy",
        "Implement proper cache headers and CDN usage",
    ),
    note(
        "Mobile First",
        "60%+ traffic is mobile, prioritize mobile performance",
    ),
    note(
        "Monitoring Tools",
        "Vercel Analytics, Google PageSpeed, Lighthouse CI, Web Vitals",
    ),
];

const PHASES: &[Phase] = &[
    Phase {
        title: "Week 1-3: Foundation",
        items: &[
            "Implement Next.js Image optimization",
            "Set up proper meta tags and SEO",
            "Configure Tailwind CSS purging",
            "Add loading states and skeletons",
        ],
    },
    Phase {
        title: "Week 4-6: Performance",
        items: &[
            "Implement code splitting",
            "Optimize bundle sizes",
            "Add service worker/caching",
            "Improve Core Web Vitals",
        ],
    },
    Phase {
        title: "Week 7-13: Advanced",
        items: &[
            "A/B test performance changes",
            "Implement analytics tracking",
            "Fine-tune conversion funnels",
            "Monitor and iterate",
        ],
    },
];

pub const OPTIMIZATION_GUIDE: Guide = Guide {
    title: "Next.js Performance Optimization Guide & Tracking Notes",
    accent: GUIDE_ORANGE,
    body: GuideBody::Notes(NOTES),
};

pub const CHECKLIST: Guide = Guide {
    title: "Next.js Performance Optimization Checklist",
    accent: GUIDE_GREEN,
    body: GuideBody::Checklist(PHASES),
};

pub fn all() -> Vec<Guide> {
    vec![OPTIMIZATION_GUIDE, CHECKLIST]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_phases_cover_the_window() {
        let GuideBody::Checklist(phases) = CHECKLIST.body else {
            panic!("checklist should hold phases");
        };
        let titles: Vec<&str> = phases.iter().map(|phase| phase.title).collect();
        assert_eq!(
            titles,
            ["Week 1-3: Foundation", "Week 4-6: Performance", "Week 7-13: Advanced"]
        );
        assert!(phases.iter().all(|phase| phase.items.len() == 4));
    }

    #[test]
    fn guide_has_ten_notes() {
        let GuideBody::Notes(notes) = OPTIMIZATION_GUIDE.body else {
            panic!("guide should hold notes");
        };
        assert_eq!(notes.len(), 10);
        assert_eq!(notes[0].topic, "Core Web Vitals");
    }
}
