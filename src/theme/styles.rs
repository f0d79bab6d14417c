//! Global CSS styles for the valentine card.
//!
//! Warm blush palette. Particle descriptors arrive as CSS custom properties
//! (`--x`, `--y`, `--rot`, `--size`, `--hue`, ...) set inline per element.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --blush: #ff6f83;
  --blush-soft: #ffd3da;
  --peach: #ffbf9b;
  --cream: #fff7f3;
  --ink: #3b1f27;
  --ink-soft: rgba(59, 31, 39, 0.7);
  --glass: rgba(255, 255, 255, 0.72);

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Nunito', 'Segoe UI', sans-serif;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--cream);
  color: var(--ink);
  font-family: var(--font-sans);
}

.page {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.panel {
  position: relative;
  min-height: 100vh;
  padding: 3rem 2rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
  overflow: hidden;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(36px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal.is-visible {
  opacity: 1;
  transform: none;
}

/* === Hero === */
.hero-panel {
  background-size: cover;
  background-position: center;
  color: #fff;
}

.hero-panel::after {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, rgba(40, 10, 20, 0.15), rgba(40, 10, 20, 0.6));
  pointer-events: none;
}

.top-bar {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  z-index: 2;
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: 1.25rem 2rem;
}

.brand {
  font-family: var(--font-serif);
  font-size: 1.2rem;
  margin: 0;
}

.top-controls {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
}

.upload-group {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  max-width: 260px;
}

.upload-notice {
  margin: 0.5rem 0 0;
  padding: 0.4rem 0.7rem;
  border-radius: 10px;
  background: var(--glass);
  color: var(--ink);
  font-size: 0.8rem;
}

button {
  font-family: var(--font-sans);
  cursor: pointer;
  border: none;
  border-radius: 999px;
  padding: 0.7rem 1.3rem;
  background: var(--blush);
  color: #fff;
  font-weight: 700;
  transition: transform 0.15s ease, box-shadow 0.15s ease;
}

button:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 8px 20px rgba(255, 111, 131, 0.35);
}

button:disabled {
  opacity: 0.6;
  cursor: progress;
}

.version-button,
.upload-button {
  background: var(--glass);
  color: var(--ink);
}

.hero-content {
  position: relative;
  z-index: 1;
  max-width: 640px;
}

.hero-content h1 {
  font-family: var(--font-serif);
  font-size: clamp(2.4rem, 6vw, 4.2rem);
  margin: 0 0 1rem;
}

.hero-title-line { display: block; }

.hero-lead {
  font-size: 1.15rem;
  line-height: 1.6;
}

.floating-hearts {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 1;
}

.floating-heart {
  position: absolute;
  bottom: -2rem;
  color: var(--blush-soft);
  font-size: 1.6rem;
  animation-name: float-up;
  animation-timing-function: ease-in;
  animation-iteration-count: infinite;
}

@keyframes float-up {
  0% { transform: translateY(0) scale(0.8); opacity: 0; }
  15% { opacity: 0.9; }
  100% { transform: translateY(-110vh) scale(1.2); opacity: 0; }
}

/* === Story === */
.story-panel {
  flex-direction: row;
  align-items: center;
  gap: 3rem;
}

.story-text { flex: 1; }

.story-text h2,
.gallery-header h2,
.ask-card h2 {
  font-family: var(--font-serif);
  font-size: clamp(1.8rem, 4vw, 2.8rem);
}

.section-label {
  text-transform: uppercase;
  letter-spacing: 0.12em;
  color: var(--blush);
  font-size: 0.8rem;
}

.story-image-frame img {
  width: min(380px, 40vw);
  border-radius: 24px;
  box-shadow: 0 24px 48px rgba(59, 31, 39, 0.2);
}

/* === Gallery === */
.gallery-rail {
  display: flex;
  gap: 1.25rem;
  overflow-x: auto;
  padding: 1rem 0 2rem;
}

.memory-card {
  flex: 0 0 auto;
  padding: 0;
  border-radius: 20px;
  background: none;
  animation: card-in 0.7s ease both;
}

.memory-card img {
  display: block;
  width: 220px;
  height: 300px;
  object-fit: cover;
  border-radius: 20px;
}

@keyframes card-in {
  from { opacity: 0; transform: translateY(24px) rotate(-2deg); }
  to { opacity: 1; transform: none; }
}

/* === Ask === */
.ask-panel { align-items: center; }

.ask-card {
  position: relative;
  z-index: 2;
  max-width: 620px;
  text-align: center;
  padding: 2.5rem;
  border-radius: 28px;
  background: #fff;
  box-shadow: 0 30px 60px rgba(59, 31, 39, 0.12);
  transition: transform 0.4s ease;
}

.ask-card.is-celebrating { transform: scale(1.04); }

.quiz-options {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.8rem;
  margin-top: 1.5rem;
}

.quiz-option {
  display: flex;
  gap: 0.8rem;
  align-items: center;
  border-radius: 14px;
  background: var(--ink);
}

.quiz-letter { color: var(--peach); }

.success-gif {
  max-width: 100%;
  border-radius: 18px;
}

/* === Confetti === */
.confetti-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 3;
}

.confetti-piece {
  position: absolute;
  left: 50%;
  top: 40%;
  opacity: 0;
  animation-name: confetti-burst;
  animation-timing-function: cubic-bezier(0.15, 0.7, 0.4, 1);
  animation-fill-mode: forwards;
}

.confetti-piece.circle { border-radius: 50%; }
.confetti-piece.rect { border-radius: 2px; }

@keyframes confetti-burst {
  0% { transform: translate(0, 0) rotate(0deg); opacity: 1; }
  100% { transform: translate(var(--x), var(--y)) rotate(var(--rot)); opacity: 0; }
}

/* === Heart rain === */
.heart-rain-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  z-index: 1;
}

.heart-drop {
  position: absolute;
  top: -3rem;
  left: var(--left);
  font-size: var(--size);
  animation: heart-fall var(--duration) linear var(--delay) infinite;
}

@keyframes heart-fall {
  0% { transform: translate(0, 0); opacity: 0; }
  10% { opacity: 1; }
  100% { transform: translate(var(--drift), 110vh); opacity: 0.2; }
}

/* === Cursor trail === */
.cursor-heart-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 50;
}

.cursor-heart {
  position: absolute;
  font-size: var(--size);
  color: hsl(var(--hue) 90% 68%);
  transform: translate(-50%, -50%) rotate(var(--rot));
  animation: cursor-fade 900ms ease-out forwards;
}

@keyframes cursor-fade {
  from { opacity: 1; }
  to { opacity: 0; transform: translate(-50%, -160%) rotate(var(--rot)) scale(0.6); }
}

/* === Reward modal === */
.reward-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(30, 8, 16, 0.6);
}

.reward-dialog {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
  padding: 1.5rem;
  border-radius: 24px;
  background: #fff;
}

.reward-dialog img {
  max-width: min(480px, 80vw);
  border-radius: 16px;
}

@media (max-width: 720px) {
  .story-panel { flex-direction: column; }
  .quiz-options { grid-template-columns: 1fr; }
}
"#;
