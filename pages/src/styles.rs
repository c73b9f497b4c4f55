//! CSS styles for the generated pages.
//!
//! The complete stylesheet is inlined into the `<head>` of every page, so the
//! generated HTML stays self-contained apart from images.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use home_leptos::styles::HOMEPAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", HOMEPAGE_CSS, my_css);
//! ```

/// Complete CSS for the homepage and the users page.
///
/// Light theme with a single accent color, responsive block grids, and the
/// splash banner styling. Class names map one-to-one onto the components in
/// [`crate::components`].
pub const HOMEPAGE_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-light: #f7f8fa;
    --bg-dark: #1c2833;
    --text-main: #24292e;
    --text-dim: #586069;
    --text-inverted: #f0f3f6;
    --accent: #2e8555;
    --accent-dark: #205d3b;
    --border-subtle: rgba(36, 41, 46, 0.1);
    --font-body: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
    --container-max: 1100px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font-body);
    color: var(--text-main);
    background: var(--bg-page);
    line-height: 1.6;
}

img { max-width: 100%; }

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* Splash banner */
.splash {
    background: var(--bg-dark);
    color: var(--text-inverted);
    padding: 48px 0;
}

.splash-fade {
    animation: splash-fade-in 0.8s ease-out;
}

@keyframes splash-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

.splash-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
    text-align: center;
}

.project-logo img {
    height: 160px;
    margin-bottom: 12px;
}

.project-title {
    font-size: 2.4rem;
    margin: 8px 0 24px;
}

.project-title small {
    display: block;
    font-size: 1.1rem;
    font-weight: 400;
    color: var(--text-inverted);
    opacity: 0.8;
    margin-top: 8px;
}

.promo-section { margin-top: 16px; }

.promo-row {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 12px;
}

.promo-button {
    display: inline-block;
    border: 1px solid var(--accent);
    border-radius: 4px;
    color: var(--text-inverted);
    background: transparent;
    padding: 10px 24px;
    font-size: 0.95rem;
    text-transform: uppercase;
    letter-spacing: 0.03em;
}

.promo-button:hover {
    background: var(--accent);
    text-decoration: none;
}

/* Content blocks */
.main-container { padding-bottom: 48px; }

.block-section { padding: 48px 0; }
.block-section.light { background: var(--bg-light); }
.block-section.dark { background: var(--bg-dark); color: var(--text-inverted); }
.block-section.dark .block-title { color: var(--text-inverted); }

.block-grid {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
    display: grid;
    gap: 32px;
}

.block-grid.two-column { grid-template-columns: 1fr; }

.block-grid.four-column {
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    text-align: center;
}

.block-cell {
    display: flex;
    gap: 32px;
    align-items: center;
}

.block-cell.image-left { flex-direction: row; }
.block-cell.image-right { flex-direction: row-reverse; }
.block-cell.image-top { flex-direction: column; }

.block-cell.image-left .block-image,
.block-cell.image-right .block-image { flex: 0 0 40%; }

.block-cell.image-top .block-image img { height: 110px; }

.block-title { font-size: 1.4rem; margin: 0 0 8px; }

.block-content ul { padding-left: 20px; margin: 8px 0; }

/* Callout */
.callout-section {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 48px 24px 24px;
    text-align: center;
}

/* Showcase */
.showcase-section {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 48px 24px;
    text-align: center;
}

.showcase-logos {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    gap: 24px;
    margin: 24px 0;
}

.showcase-logos img {
    height: 80px;
    filter: grayscale(100%);
    transition: filter 0.2s ease;
}

.showcase-logos img:hover { filter: none; }

.more-users .promo-button {
    border-color: var(--accent);
    color: var(--accent);
}

.more-users .promo-button:hover {
    color: var(--text-inverted);
    background: var(--accent);
}

/* Users page */
.users-page {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 48px 24px;
    text-align: center;
}

.users-grid {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 32px;
    margin-top: 32px;
}

.user-card { width: 160px; }

.user-card img { height: 80px; }

.user-card .user-caption {
    display: block;
    margin-top: 8px;
    color: var(--text-dim);
    font-size: 0.9rem;
}

.back-home { margin-top: 32px; }

@media (max-width: 720px) {
    .block-cell.image-left,
    .block-cell.image-right { flex-direction: column; }
    .project-logo img { height: 110px; }
}
"#;
