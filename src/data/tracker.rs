use super::{weeks, DataTable, WeekValue, WEEK_COUNT};

/// Six tracked weeks; the summary column holds the average of those weeks.
pub fn table() -> DataTable {
    DataTable::from_catalog(values)
}

fn values(id: &str) -> Option<([WeekValue; WEEK_COUNT], f64)> {
    let entry = match id {
        // Core Web Vitals
        "lcp" => (weeks([2.1, 1.9, 1.7, 1.5, 1.3, 1.2]), 1.6),
        "fid" => (weeks([120.0, 95.0, 75.0, 60.0, 45.0, 35.0]), 72.0),
        "cls" => (weeks([0.25, 0.2, 0.15, 0.12, 0.08, 0.05]), 0.14),

        // PageSpeed Insights
        "pageSpeedMobile" => (weeks([72.0, 78.0, 83.0, 87.0, 91.0, 94.0]), 84.0),
        "pageSpeedDesktop" => (weeks([85.0, 89.0, 92.0, 95.0, 97.0, 98.0]), 93.0),

        // Loading Performance
        "pageLoadTime" => (weeks([3.2, 2.8, 2.4, 2.1, 1.8, 1.6]), 2.3),
        "ttfb" => (weeks([450.0, 380.0, 320.0, 280.0, 240.0, 210.0]), 313.0),
        "bundleSize" => (weeks([280.0, 260.0, 235.0, 210.0, 185.0, 165.0]), 223.0),

        // User Experience
        "bounceRate" => (weeks([45.0, 42.0, 38.0, 35.0, 32.0, 28.0]), 37.0),
        "avgSessionDuration" => (weeks([2.1, 2.4, 2.8, 3.2, 3.6, 4.1]), 3.0),
        "pagesPerSession" => (weeks([1.8, 2.1, 2.4, 2.7, 3.1, 3.4]), 2.6),

        // SEO & Accessibility
        "seoScore" => (weeks([78.0, 82.0, 86.0, 90.0, 93.0, 96.0]), 87.0),
        "accessibilityScore" => (weeks([85.0, 88.0, 91.0, 94.0, 96.0, 98.0]), 92.0),
        // organic traffic reports the running total, not the mean
        "organicTraffic" => (
            weeks([1250.0, 1420.0, 1680.0, 1950.0, 2240.0, 2580.0]),
            11120.0,
        ),

        // Conversion & Business
        "conversionRate" => (weeks([2.3, 2.8, 3.2, 3.7, 4.1, 4.6]), 3.5),
        "revenuePerVisitor" => (weeks([4.5, 5.2, 6.1, 7.2, 8.4, 9.8]), 6.87),

        // Technical Performance
        "imageOptimization" => (weeks([65.0, 72.0, 78.0, 85.0, 91.0, 96.0]), 81.0),
        "jsBundleSize" => (weeks([145.0, 132.0, 118.0, 105.0, 92.0, 85.0]), 113.0),
        "cssBundleSize" => (weeks([45.0, 38.0, 32.0, 28.0, 24.0, 21.0]), 31.0),
        "cacheHitRate" => (weeks([68.0, 74.0, 81.0, 86.0, 91.0, 95.0]), 82.0),

        // Mobile Optimization
        "mobileLoadTime" => (weeks([4.2, 3.8, 3.3, 2.9, 2.5, 2.2]), 3.2),
        "mobileTrafficShare" => (weeks([58.0, 61.0, 63.0, 65.0, 67.0, 69.0]), 64.0),

        _ => return None,
    };

    Some(entry)
}
