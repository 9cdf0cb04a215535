pub const SECTION_STYLES: &str = r#"
/* Hero Section */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  position: relative;
  overflow: hidden;
  padding-top: var(--space-20);
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  pointer-events: none;
}

.portfolio.dark .hero-backdrop {
  opacity: 0.2;
}

.hero-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, var(--primary-light), var(--accent));
  transform: rotate(12deg) scale(1.5);
}

.hero-grid {
  display: grid;
  grid-template-columns: repeat(10, 1fr);
  grid-template-rows: repeat(10, 1fr);
  height: 100%;
  width: 100%;
}

.hero-grid div {
  border: 1px solid var(--neutral-300);
  opacity: 0.2;
}

.hero-layout {
  position: relative;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: var(--space-10);
  padding: var(--space-12) 0;
}

.hero-text {
  flex: 3;
  animation: fade-in 0.6s var(--easing-standard);
}

.hero-greeting {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-md);
  background-color: var(--primary-soft);
  color: var(--primary-dark);
  margin-bottom: var(--space-4);
}

.portfolio.dark .hero-greeting {
  color: #93C5FD;
}

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-headline {
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.hero-intro {
  font-size: 1.125rem;
  max-width: 42rem;
  margin-bottom: var(--space-8);
}

.hero-actions,
.social-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.hero-portrait {
  flex: 2;
  display: flex;
  justify-content: center;
}

.hero-portrait-frame {
  width: 320px;
  height: 320px;
  border-radius: var(--radius-full);
  background-color: var(--primary-soft);
  overflow: hidden;
}

.hero-portrait-frame img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: none; }
}

/* About Section */
.about-layout,
.contact-layout {
  display: flex;
  align-items: center;
  gap: var(--space-12);
}

.about-image,
.about-text,
.contact-info,
.contact-form {
  flex: 1;
}

.about-image-frame {
  position: relative;
  max-width: 32rem;
  margin: 0 auto;
  padding: var(--space-1);
  border-radius: var(--radius-lg);
  background-color: var(--background-alt);
}

.about-image-frame img {
  position: relative;
  z-index: 10;
  width: 100%;
  border-radius: var(--radius-lg);
}

.about-text p {
  font-size: 1.125rem;
  margin-bottom: var(--space-6);
}

.highlights {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
  margin-top: var(--space-8);
}

.highlight,
.contact-item {
  display: flex;
  align-items: center;
}

.icon-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3);
  margin-right: var(--space-4);
  border-radius: var(--radius-full);
  background-color: var(--primary-soft);
  color: var(--primary);
}

.portfolio.dark .icon-badge {
  background-color: var(--neutral-800);
  color: var(--primary-light);
}

.highlight-title,
.contact-label {
  font-weight: 700;
}

.highlight-caption {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Skills Section */
.card-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* Experience Section */
.timeline {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: var(--space-20);
}

.timeline::before {
  content: "";
  position: absolute;
  left: 50%;
  transform: translateX(-50%);
  height: 100%;
  width: 4px;
  background-color: var(--neutral-300);
}

.timeline-item {
  display: flex;
  align-items: center;
}

.timeline-item.right {
  flex-direction: row-reverse;
}

.timeline-card-slot,
.timeline-spacer {
  width: 50%;
}

.timeline-item.left .timeline-card-slot {
  text-align: right;
  padding-right: var(--space-8);
}

.timeline-item.right .timeline-card-slot {
  padding-left: var(--space-8);
}

.timeline-marker {
  position: relative;
  width: 48px;
  display: flex;
  justify-content: center;
}

.timeline-marker::after {
  content: "";
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  border: 4px solid var(--surface);
}

.timeline-company {
  font-size: 1.25rem;
  font-weight: 700;
}

.timeline-role {
  font-weight: 500;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.timeline-period {
  font-size: 0.875rem;
  color: var(--text-tertiary);
  margin-bottom: var(--space-4);
}

/* Projects Section */
.project-card {
  padding: 0;
  overflow: hidden;
}

.project-media {
  position: relative;
  overflow: hidden;
}

.project-media img {
  width: 100%;
  aspect-ratio: 8/5;
  object-fit: cover;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-media img {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  background-color: rgba(255, 255, 255, 0.7);
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.portfolio.dark .project-overlay {
  background-color: rgba(0, 0, 0, 0.7);
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.project-body {
  padding: var(--space-6);
}

.project-tech {
  font-size: 0.875rem;
  color: var(--primary);
  margin-bottom: var(--space-4);
}

.project-features-title {
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.project-body .dot-list {
  gap: var(--space-1);
  font-size: 0.875rem;
}

/* Certifications Section */
.cert-badge {
  width: 48px;
  height: 48px;
  margin-bottom: var(--space-4);
  margin-right: 0;
}

.cert-issuer {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Contact Section */
.contact-layout {
  align-items: flex-start;
}

.contact-heading {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
}

.contact-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.contact-item {
  align-items: flex-start;
}

.contact-item .icon-badge {
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.contact-item a {
  color: var(--text-secondary);
}

.contact-item a:hover {
  color: var(--text-primary);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-row {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
}

/* Footer */
.site-footer {
  padding: var(--space-8) 0;
  background-color: var(--footer);
  color: var(--text-inverse);
}

.footer-top,
.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.footer-bottom {
  border-top: 1px solid var(--neutral-700);
  margin-top: var(--space-8);
  padding-top: var(--space-8);
}

.site-footer .brand-first {
  color: var(--primary-light);
}

.footer-tagline,
.footer-copyright {
  color: var(--neutral-400);
}

.site-footer .btn-round {
  background-color: var(--neutral-700);
  color: var(--text-inverse);
}

.site-footer .btn-round:hover {
  background-color: var(--neutral-600);
}

.site-footer .social-links {
  margin-bottom: 0;
}

@media (max-width: 768px) {
  .hero-layout,
  .about-layout,
  .contact-layout,
  .footer-top,
  .footer-bottom {
    flex-direction: column;
  }

  .hero-title {
    font-size: 3rem;
  }

  .timeline::before,
  .timeline-marker,
  .timeline-spacer {
    display: none;
  }

  .timeline-item,
  .timeline-item.right {
    flex-direction: column;
  }

  .timeline-card-slot,
  .timeline-item.left .timeline-card-slot,
  .timeline-item.right .timeline-card-slot {
    width: 100%;
    padding: 0;
    text-align: left;
  }

  .form-row {
    grid-template-columns: 1fr;
  }
}
"#;
