//! Global CSS styles for Folio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #111111;
  --void-border: #1a1a1a;

  /* Accents */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Projects Section === */
.projects-section {
  display: flex;
  justify-content: center;
  padding: 5rem 1rem;
  background: rgba(212, 175, 55, 0.06);
}

.projects-section__container {
  width: 100%;
  max-width: 1280px;
}

.projects-section__heading {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  color: var(--gold);
  margin-bottom: 2rem;
}

.projects-status {
  text-align: center;
  color: var(--text-muted);
  padding: 5rem 1rem;
}

/* === Project Grid === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 2rem;
}

@media (min-width: 768px) {
  .project-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
  .project-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

/* === Project Card === */
.project-card {
  height: 100%;
  display: flex;
  flex-direction: column;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
  cursor: pointer;
  transition: filter var(--transition-fast);
}

.project-card:hover {
  filter: brightness(1.25);
}

.project-card__img {
  width: 100%;
  display: block;
  border-radius: 8px 8px 0 0;
}

.project-card__body {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.5rem;
}

.project-card__title {
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--gold);
  margin-bottom: 0.5rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 10, 10, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  max-width: 480px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-content.project-modal {
  max-width: 720px;
}

.modal-header {
  display: flex;
  justify-content: flex-end;
  padding: 0.5rem 0.75rem 0;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
  padding: 0.25rem 0.5rem;
  transition: color var(--transition-fast);
  line-height: 1;
}

.icon-btn:hover {
  color: var(--text-primary);
}

.close-btn {
  font-size: var(--text-xl);
}

/* === Project Detail === */
.project-detail {
  padding: 0 1.5rem 1.5rem;
}

.project-detail__title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 1rem;
}

.project-detail__img {
  width: 100%;
  border-radius: 8px;
  margin-bottom: 1rem;
}

.project-detail__description {
  margin-bottom: 0.5rem;
}

.project-detail__technologies {
  font-weight: 600;
}

.project-detail__links {
  display: flex;
  justify-content: flex-end;
  gap: 1rem;
  margin-top: 1rem;
}

.project-link {
  display: flex;
  gap: 0.5rem;
  color: var(--cyan);
  transition: color var(--transition-fast);
}

.project-link:hover {
  color: var(--text-primary);
}
"#;
