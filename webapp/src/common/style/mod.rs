use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Page shell */
.portfolio {
  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.app-header {
  position: fixed;
  width: 100%;
  top: 0;
  z-index: 50;
  background-color: var(--surface-raised);
  box-shadow: var(--shadow-md);
  transition: top var(--transition-normal) var(--easing-standard);
}

.portfolio.light .app-header {
  background-color: #FFFFFF;
}

.app-header.hidden {
  top: calc(-1 * var(--header-height) - 8px);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
}

.brand-first {
  color: var(--primary);
}

.nav-links {
  display: flex;
  gap: var(--space-6);
}

.nav-link {
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  cursor: pointer;
  color: inherit;
  font-size: 1rem;
  padding: var(--space-1) var(--space-2);
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link.active {
  color: var(--primary);
  border-bottom-color: var(--primary);
}

.theme-toggle {
  padding: var(--space-2);
}

.portfolio.dark .theme-toggle {
  color: #FDE047;
}

.section {
  padding: var(--space-20) 0;
}

.section.alt {
  background-color: var(--background-alt);
}

.section-heading {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-rule {
  width: 96px;
  height: 4px;
  margin: 0 auto;
  background-color: var(--primary);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }
}
"#,
    SECTION_STYLES
);
