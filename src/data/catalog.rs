//! Metric identifiers, display names and table grouping shared by every
//! dashboard variant. Values live in the per-variant modules.

pub struct MetricDef {
    pub id: &'static str,
    pub name: &'static str,
}

pub struct CategoryDef {
    pub label: &'static str,
    pub metrics: &'static [MetricDef],
}

const fn metric(id: &'static str, name: &'static str) -> MetricDef {
    MetricDef { id, name }
}

pub const CATALOG: &[CategoryDef] = &[
    CategoryDef {
        label: "CORE WEB VITALS",
        metrics: &[
            metric("lcp", "Largest Contentful Paint (LCP) - seconds"),
            metric("fid", "First Input Delay (FID) - milliseconds"),
            metric("cls", "Cumulative Layout Shift (CLS)"),
        ],
    },
    CategoryDef {
        label: "PAGESPEED INSIGHTS SCORES",
        metrics: &[
            metric("pageSpeedMobile", "PageSpeed Score - Mobile (0-100)"),
            metric("pageSpeedDesktop", "PageSpeed Score - Desktop (0-100)"),
        ],
    },
    CategoryDef {
        label: "LOADING PERFORMANCE",
        metrics: &[
            metric("pageLoadTime", "Page Load Time - seconds"),
            metric("ttfb", "Time to First Byte (TTFB) - ms"),
            metric("bundleSize", "Bundle Size - KB"),
        ],
    },
    CategoryDef {
        label: "USER EXPERIENCE",
        metrics: &[
            metric("bounceRate", "Bounce Rate - %"),
            metric("avgSessionDuration", "Average Session Duration - minutes"),
            metric("pagesPerSession", "Pages per Session"),
        ],
    },
    CategoryDef {
        label: "SEO & ACCESSIBILITY",
        metrics: &[
            metric("seoScore", "Lighthouse SEO Score (0-100)"),
            metric("accessibilityScore", "Lighthouse Accessibility Score (0-100)"),
            metric("organicTraffic", "Organic Search Traffic (weekly visits)"),
        ],
    },
    CategoryDef {
        label: "CONVERSION & BUSINESS METRICS",
        metrics: &[
            metric("conversionRate", "Conversion Rate - %"),
            metric("revenuePerVisitor", "Revenue per Visitor - $"),
        ],
    },
    CategoryDef {
        label: "TECHNICAL PERFORMANCE",
        metrics: &[
            metric("imageOptimization", "Image Optimization Score (% optimized)"),
            metric("jsBundleSize", "JavaScript Bundle First Load - KB"),
            metric("cssBundleSize", "CSS Bundle Size - KB"),
            metric("cacheHitRate", "Cache Hit Rate - %"),
        ],
    },
    CategoryDef {
        label: "MOBILE OPTIMIZATION",
        metrics: &[
            metric("mobileLoadTime", "Mobile Page Load Time - seconds"),
            metric("mobileTrafficShare", "Mobile Traffic Share - %"),
        ],
    },
];
