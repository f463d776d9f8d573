//! Sitemap + robots generation into a real directory.

mod common;

use common::{route, sitemap_route, StaticFetcher};
use seorion::config::schema::{ChangeFreq, RobotsConfig, SitemapConfig};
use seorion::sitemap::FileGenerator;

fn no_dynamic() -> StaticFetcher {
    StaticFetcher {
        paths: Vec::new(),
        fail: false,
    }
}

#[tokio::test]
async fn writes_sitemap_and_robots() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FileGenerator::new("https://example.com", dir.path()).unwrap();

    let mut about = sitemap_route("/about", "About Us");
    about.sitemap.as_mut().unwrap().change_freq = Some(ChangeFreq::Monthly);
    about.sitemap.as_mut().unwrap().priority = Some(0.8);

    let routes = vec![
        about,
        sitemap_route("/contact", "Contact"),
        route("/hidden", "Hidden"), // no sitemap entry at all
    ];

    let files = generator
        .generate(&routes, &RobotsConfig::default(), &no_dynamic())
        .await
        .unwrap();
    assert_eq!(files.url_count, 2);

    let xml = std::fs::read_to_string(&files.sitemap).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<loc>https://example.com/about</loc>"));
    assert!(xml.contains("<loc>https://example.com/contact</loc>"));
    assert!(!xml.contains("/hidden"));
    assert!(xml.contains("<changefreq>monthly</changefreq>"));
    assert!(xml.contains("<priority>0.8</priority>"));
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert!(xml.contains(&format!("<lastmod>{today}</lastmod>")));

    let robots = std::fs::read_to_string(&files.robots).unwrap();
    assert!(robots.contains("User-agent: *"));
    assert!(robots.contains("Disallow: /admin"));
    assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
}

#[tokio::test]
async fn excluded_routes_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FileGenerator::new("https://example.com", dir.path()).unwrap();

    let mut excluded = route("/draft", "Draft");
    excluded.sitemap = Some(SitemapConfig {
        include: false,
        ..SitemapConfig::default()
    });

    let files = generator
        .generate(&[excluded], &RobotsConfig::default(), &no_dynamic())
        .await
        .unwrap();
    assert_eq!(files.url_count, 0);
}

#[tokio::test]
async fn dynamic_routes_expand_and_keep_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FileGenerator::new("https://example.com", dir.path()).unwrap();

    let mut blog = route("/blog/:slug", "Blog");
    blog.sitemap = Some(SitemapConfig {
        include: true,
        dynamic: true,
        endpoint: Some("/api/posts".to_string()),
        model_opt: Some("slug".to_string()),
        change_freq: Some(ChangeFreq::Weekly),
        ..SitemapConfig::default()
    });

    let fetcher = StaticFetcher {
        paths: vec!["/blog/first-post".to_string(), "/blog/second-post".to_string()],
        fail: false,
    };

    let files = generator
        .generate(&[blog], &RobotsConfig::default(), &fetcher)
        .await
        .unwrap();
    assert_eq!(files.url_count, 2);

    let xml = std::fs::read_to_string(&files.sitemap).unwrap();
    assert!(xml.contains("<loc>https://example.com/blog/first-post</loc>"));
    assert!(xml.contains("<loc>https://example.com/blog/second-post</loc>"));
    // Expanded URLs match /blog/:slug, so its entry metadata applies.
    assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 2);
}

#[tokio::test]
async fn failed_dynamic_fetch_falls_back_to_base_path() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FileGenerator::new("https://example.com", dir.path()).unwrap();

    let mut blog = route("/blog/:slug", "Blog");
    blog.sitemap = Some(SitemapConfig {
        include: true,
        dynamic: true,
        endpoint: Some("/api/posts".to_string()),
        model_opt: Some("slug".to_string()),
        ..SitemapConfig::default()
    });

    let fetcher = StaticFetcher {
        paths: Vec::new(),
        fail: true,
    };

    let files = generator
        .generate(&[blog], &RobotsConfig::default(), &fetcher)
        .await
        .unwrap();
    assert_eq!(files.url_count, 1);

    let xml = std::fs::read_to_string(&files.sitemap).unwrap();
    assert!(xml.contains("<loc>https://example.com/blog</loc>"));
}

#[tokio::test]
async fn custom_robots_policy_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FileGenerator::new("https://example.com", dir.path()).unwrap();

    let robots = RobotsConfig {
        disallow: vec!["/internal".to_string()],
        allow: vec!["/".to_string()],
    };

    let files = generator
        .generate(&[], &robots, &no_dynamic())
        .await
        .unwrap();

    let text = std::fs::read_to_string(&files.robots).unwrap();
    assert!(text.contains("Disallow: /internal"));
    assert!(!text.contains("Disallow: /admin"));
}
