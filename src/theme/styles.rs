//! Global CSS styles for the card.
//!
//! Soft paper-and-blush aesthetic; all scene sequencing that needs no
//! logic (staggered celebration reveals, flap rotation, caret blink)
//! lives here as CSS animations.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fdfbf7;
  --paper-warm: #fff5f5;

  /* BLUSH (Primary accents) */
  --blush: #d4a5a5;
  --blush-deep: #c29191;
  --blush-muted: #9e8c8c;

  /* ENVELOPE */
  --envelope-body: #e8d5d5;
  --envelope-flap: #e2caca;
  --envelope-flap-bottom: #dcb8b8;
  --wax-red: #b54e4e;

  /* TEXT */
  --ink: #5d5555;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-cursive: 'Great Vibes', cursive;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-normal: 500ms ease-in-out;
  --transition-slow: 700ms ease-in-out;
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
}

body {
  font-family: var(--font-serif);
  color: var(--ink);
  min-height: 100vh;
  overflow: hidden;
}

/* === App shell === */
.app-shell {
  position: relative;
  min-height: 100vh;
  width: 100%;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: var(--paper);
  transition: background-color 1s ease;
}

.app-shell.warm-mode {
  background: var(--paper-warm);
}

.card-stage {
  position: relative;
  z-index: 10;
  width: 100%;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.credits {
  position: fixed;
  bottom: 0.5rem;
  width: 100%;
  text-align: center;
  padding: 0.5rem;
  opacity: 0.3;
  font-size: 0.75rem;
  pointer-events: none;
}

/* === Particle layer === */
.particle-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  transition: opacity 1s ease;
}

.particle {
  position: absolute;
}

/* === Envelope === */
.envelope-stage {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  width: 100%;
  padding: 1rem;
}

.envelope {
  position: relative;
  width: 100%;
  max-width: 400px;
  height: 260px;
  cursor: pointer;
  perspective: 1000px;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.envelope.hovered {
  transform: scale(1.05);
}

.envelope.opening {
  transform: scale(1.1) translateY(5rem);
  opacity: 0;
}

.env-body {
  position: absolute;
  inset: 0;
  border-radius: 0.5rem;
  background: var(--envelope-body);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.env-letter-peek {
  position: absolute;
  left: 1rem;
  right: 1rem;
  top: 10px;
  bottom: 10px;
  background: white;
  z-index: 1;
  transition: transform var(--transition-slow);
}

.envelope.opening .env-letter-peek {
  transform: translateY(-100px);
}

.env-peek-text {
  padding: 1rem;
  font-size: 0.8rem;
  color: #9ca3af;
  opacity: 0.5;
}

/* Flaps drawn as border triangles */
.env-flap {
  position: absolute;
  width: 0;
  height: 0;
  z-index: 20;
}

.env-flap-bottom {
  bottom: 0;
  border-left: 200px solid transparent;
  border-right: 200px solid transparent;
  border-bottom: 130px solid var(--envelope-flap-bottom);
}

.env-flap-left {
  top: 0;
  left: 0;
  border-top: 130px solid transparent;
  border-bottom: 130px solid transparent;
  border-left: 200px solid var(--envelope-flap);
}

.env-flap-right {
  top: 0;
  right: 0;
  border-top: 130px solid transparent;
  border-bottom: 130px solid transparent;
  border-right: 200px solid var(--envelope-flap);
}

.env-flap-top {
  position: absolute;
  top: 0;
  left: 0;
  width: 0;
  height: 0;
  border-left: 200px solid transparent;
  border-right: 200px solid transparent;
  border-top: 130px solid var(--blush);
  transform-origin: top;
  transition: transform var(--transition-slow);
  z-index: 30;
}

.envelope.hovered .env-flap-top,
.envelope.opening .env-flap-top {
  transform: rotateX(180deg);
  z-index: 10;
}

.wax-seal {
  position: absolute;
  top: 45%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--wax-red);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  transition: opacity var(--transition-fast);
  z-index: 40;
}

.envelope.opening .wax-seal {
  opacity: 0;
}

.wax-heart {
  color: var(--envelope-body);
  font-family: var(--font-cursive);
  font-size: 1.5rem;
}

.open-hint {
  position: absolute;
  bottom: -4rem;
  width: 100%;
  text-align: center;
  color: #6b7280;
  letter-spacing: 0.2em;
  font-size: 0.875rem;
  animation: pulse 2s ease-in-out infinite;
}

/* === Letter === */
.letter {
  position: relative;
  z-index: 20;
  width: 100%;
  max-width: 42rem;
  margin: 0 auto;
  padding: 1rem;
  animation: fade-in-up 1s ease both;
}

.letter-paper {
  position: relative;
  background:
    linear-gradient(rgba(253, 251, 247, 0.92), rgba(253, 251, 247, 0.92)),
    linear-gradient(#e5e5e5 1px, transparent 1px),
    linear-gradient(90deg, #e5e5e5 1px, transparent 1px);
  background-size: auto, 40px 40px, 40px 40px;
  box-shadow: 0 10px 40px -10px rgba(0, 0, 0, 0.1);
  border-radius: 0.125rem;
  padding: 3rem 2rem;
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  overflow: hidden;
}

.letter-heading {
  font-family: var(--font-cursive);
  font-size: 2.5rem;
  font-weight: normal;
  color: var(--blush);
  margin-bottom: 2rem;
  text-align: center;
}

.letter-body {
  flex-grow: 1;
  width: 100%;
  text-align: center;
  margin-bottom: 3rem;
  overflow-y: auto;
  max-height: 50vh;
  scroll-behavior: smooth;
}

.letter-text {
  font-size: 1.125rem;
  line-height: 1.8;
  white-space: pre-line;
}

.caret {
  display: inline-block;
  width: 2px;
  height: 1.25rem;
  margin-left: 0.25rem;
  background: var(--blush);
  vertical-align: text-bottom;
  animation: pulse 1s ease-in-out infinite;
}

/* Buttons stay inert until the typewriter finishes */
.letter-actions {
  display: flex;
  gap: 1.5rem;
  align-items: center;
  justify-content: center;
  opacity: 0;
  pointer-events: none;
  transition: opacity 1s ease;
}

.letter-actions.revealed {
  opacity: 1;
  pointer-events: auto;
}

.btn-accept {
  padding: 0.75rem 2rem;
  background: var(--blush);
  color: white;
  border: none;
  border-radius: 9999px;
  font-family: var(--font-serif);
  font-size: 1.125rem;
  letter-spacing: 0.025em;
  cursor: pointer;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  transition: all var(--transition-fast);
}

.btn-accept:hover:enabled {
  background: var(--blush-deep);
  transform: scale(1.05);
  box-shadow: 0 0 20px rgba(212, 165, 165, 0.6);
}

.evade-slot {
  position: relative;
  transition: transform 300ms ease-out;
}

.btn-evade {
  padding: 0.75rem 2rem;
  background: white;
  border: 1px solid var(--blush);
  color: var(--blush);
  border-radius: 9999px;
  font-family: var(--font-serif);
  font-size: 1.125rem;
  letter-spacing: 0.025em;
  cursor: pointer;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: background var(--transition-fast);
}

.btn-evade:hover {
  background: #fcf5f5;
}

/* === Music toggle === */
.music-toggle {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 50;
  padding: 0.75rem;
  background: rgba(255, 255, 255, 0.5);
  border: none;
  border-radius: 9999px;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  color: var(--ink);
  font-size: 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.music-toggle:hover {
  background: rgba(255, 255, 255, 0.8);
  color: var(--blush);
}

/* === Celebration === */
.celebration {
  position: relative;
  z-index: 20;
  min-height: 100vh;
  width: 100%;
  max-width: 48rem;
  margin: 0 auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.celebrate-header {
  margin-bottom: 2.5rem;
}

.celebrate-eyebrow {
  font-size: 0.875rem;
  color: var(--blush-muted);
  letter-spacing: 0.2em;
  text-transform: uppercase;
  margin-bottom: 1rem;
}

.celebrate-title {
  font-family: var(--font-serif);
  font-weight: normal;
  font-size: 3.5rem;
  color: var(--blush);
  text-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.celebrate-message {
  margin-bottom: 3rem;
}

.celebrate-message p {
  font-size: 1.375rem;
  line-height: 2;
  letter-spacing: 0.025em;
}

.celebrate-quote p {
  font-size: 1.125rem;
  font-style: italic;
  color: var(--blush-muted);
  line-height: 1.8;
}

.celebrate-closing {
  margin-top: 3rem;
  font-size: 0.75rem;
  opacity: 0.3;
}

/* Staggered reveals: immediate, +1s, +3.5s */
.reveal-now {
  animation: fade-in 1.5s ease both;
}

.reveal-after-1s {
  opacity: 0;
  animation: fade-in-up 1.8s ease 1s both;
}

.reveal-after-3500ms {
  opacity: 0;
  animation: fade-in-slow 2.5s ease 3.5s both;
}

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(1.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in-slow {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}
"#;
