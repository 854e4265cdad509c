use super::{weeks, DataTable, WeekValue, WEEK_COUNT};

/// All thirteen weeks populated. The summary column carries the week 13
/// reading rather than an average.
pub fn table() -> DataTable {
    DataTable::from_catalog(values)
}

fn values(id: &str) -> Option<([WeekValue; WEEK_COUNT], f64)> {
    let entry = match id {
        "lcp" => (
            weeks([2.1, 1.9, 1.7, 1.5, 1.3, 1.2, 1.1, 1.05, 1.0, 0.95, 0.92, 0.9, 0.88]),
            0.88,
        ),
        "fid" => (
            weeks([
                120.0, 95.0, 75.0, 60.0, 45.0, 35.0, 30.0, 27.0, 24.0, 22.0, 20.0, 18.0, 16.0,
            ]),
            16.0,
        ),
        "cls" => (
            weeks([
                0.25, 0.2, 0.15, 0.12, 0.08, 0.05, 0.04, 0.04, 0.03, 0.03, 0.02, 0.02, 0.02,
            ]),
            0.02,
        ),
        "pageSpeedMobile" => (
            weeks([
                72.0, 78.0, 83.0, 87.0, 91.0, 94.0, 95.0, 96.0, 96.0, 97.0, 97.0, 98.0, 98.0,
            ]),
            98.0,
        ),
        "pageSpeedDesktop" => (
            weeks([
                85.0, 89.0, 92.0, 95.0, 97.0, 98.0, 98.0, 99.0, 99.0, 99.0, 99.0, 100.0, 100.0,
            ]),
            100.0,
        ),
        "pageLoadTime" => (
            weeks([3.2, 2.8, 2.4, 2.1, 1.8, 1.6, 1.5, 1.4, 1.35, 1.3, 1.25, 1.2, 1.15]),
            1.15,
        ),
        "ttfb" => (
            weeks([
                450.0, 380.0, 320.0, 280.0, 240.0, 210.0, 195.0, 180.0, 170.0, 160.0, 150.0,
                145.0, 140.0,
            ]),
            140.0,
        ),
        "bundleSize" => (
            weeks([
                280.0, 260.0, 235.0, 210.0, 185.0, 165.0, 158.0, 150.0, 145.0, 140.0, 136.0,
                132.0, 128.0,
            ]),
            128.0,
        ),
        "bounceRate" => (
            weeks([
                45.0, 42.0, 38.0, 35.0, 32.0, 28.0, 27.0, 26.0, 25.0, 24.0, 23.0, 22.0, 21.0,
            ]),
            21.0,
        ),
        "avgSessionDuration" => (
            weeks([2.1, 2.4, 2.8, 3.2, 3.6, 4.1, 4.3, 4.5, 4.6, 4.8, 4.9, 5.0, 5.2]),
            5.2,
        ),
        "pagesPerSession" => (
            weeks([1.8, 2.1, 2.4, 2.7, 3.1, 3.4, 3.5, 3.6, 3.7, 3.8, 3.9, 4.0, 4.1]),
            4.1,
        ),
        "seoScore" => (
            weeks([
                78.0, 82.0, 86.0, 90.0, 93.0, 96.0, 97.0, 97.0, 98.0, 98.0, 99.0, 99.0, 100.0,
            ]),
            100.0,
        ),
        "accessibilityScore" => (
            weeks([
                85.0, 88.0, 91.0, 94.0, 96.0, 98.0, 98.0, 99.0, 99.0, 99.0, 100.0, 100.0, 100.0,
            ]),
            100.0,
        ),
        "organicTraffic" => (
            weeks([
                1250.0, 1420.0, 1680.0, 1950.0, 2240.0, 2580.0, 2750.0, 2910.0, 3080.0, 3240.0,
                3410.0, 3590.0, 3760.0,
            ]),
            3760.0,
        ),
        "conversionRate" => (
            weeks([2.3, 2.8, 3.2, 3.7, 4.1, 4.6, 4.8, 5.0, 5.1, 5.3, 5.4, 5.6, 5.7]),
            5.7,
        ),
        "revenuePerVisitor" => (
            weeks([4.5, 5.2, 6.1, 7.2, 8.4, 9.8, 10.2, 10.6, 10.9, 11.3, 11.6, 12.0, 12.3]),
            12.3,
        ),
        "imageOptimization" => (
            weeks([
                65.0, 72.0, 78.0, 85.0, 91.0, 96.0, 97.0, 97.0, 98.0, 98.0, 99.0, 99.0, 99.0,
            ]),
            99.0,
        ),
        "jsBundleSize" => (
            weeks([
                145.0, 132.0, 118.0, 105.0, 92.0, 85.0, 82.0, 80.0, 78.0, 76.0, 74.0, 72.0, 70.0,
            ]),
            70.0,
        ),
        "cssBundleSize" => (
            weeks([
                45.0, 38.0, 32.0, 28.0, 24.0, 21.0, 20.0, 19.0, 18.0, 18.0, 17.0, 17.0, 16.0,
            ]),
            16.0,
        ),
        "cacheHitRate" => (
            weeks([
                68.0, 74.0, 81.0, 86.0, 91.0, 95.0, 96.0, 96.0, 97.0, 97.0, 98.0, 98.0, 98.0,
            ]),
            98.0,
        ),
        "mobileLoadTime" => (
            weeks([4.2, 3.8, 3.3, 2.9, 2.5, 2.2, 2.1, 2.0, 1.9, 1.85, 1.8, 1.75, 1.7]),
            1.7,
        ),
        "mobileTrafficShare" => (
            weeks([
                58.0, 61.0, 63.0, 65.0, 67.0, 69.0, 70.0, 70.0, 71.0, 72.0, 72.0, 73.0, 74.0,
            ]),
            74.0,
        ),
        _ => return None,
    };

    Some(entry)
}
