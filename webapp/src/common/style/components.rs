pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  color: var(--text-inverse);
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-dark {
  background-color: var(--neutral-800);
}

.portfolio.dark .btn-dark {
  background-color: var(--neutral-700);
}

.btn-dark:hover {
  background-color: var(--neutral-600);
}

.btn-round {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  border: none;
  cursor: pointer;
  background-color: var(--neutral-200);
  color: var(--neutral-700);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.btn-round:hover {
  background-color: var(--neutral-300);
  text-decoration: none;
}

.portfolio.dark .btn-round {
  background-color: var(--neutral-800);
  color: var(--text-primary);
}

.portfolio.dark .btn-round:hover {
  background-color: var(--neutral-700);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  padding: var(--space-6);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card.lift:hover {
  transform: translateY(-8px);
}

.card:hover {
  box-shadow: var(--shadow-xl);
}

/* Bullet lists */
.dot-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.dot-list li {
  display: flex;
  align-items: center;
}

.dot-list li::before {
  content: "";
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  margin-right: var(--space-3);
  flex-shrink: 0;
}

/* Form Elements */
.form-group {
  display: flex;
  flex-direction: column;
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--border-focus);
  box-shadow: 0 0 0 2px var(--primary);
  outline: none;
}

.form-textarea {
  min-height: 128px;
  resize: vertical;
}

/* Icons */
.icon::before {
  display: inline-block;
  width: 20px;
  text-align: center;
  line-height: 1;
}

.icon-github::before { content: "\1F431"; }
.icon-linkedin::before { content: "in"; font-weight: 700; }
.icon-mail::before { content: "\2709"; }
.icon-phone::before { content: "\260E"; }
.icon-calendar::before { content: "\1F4C5"; }
.icon-code::before { content: "</>"; font-weight: 700; }
.icon-star::before { content: "\2605"; }
.icon-sun::before { content: "\2600"; }
.icon-moon::before { content: "\263E"; }
.icon-arrow::before { content: "\2192"; }
.icon-external::before { content: "\2197"; }
.icon-chevron-up::before { content: "\2303"; }

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}
"#;
