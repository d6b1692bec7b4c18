// Speech synthesis via the platform speech command
//
// There is no in-process TTS engine; each platform ships a synthesizer
// command and we spawn it: `say` on macOS, `espeak` or `spd-say` on Linux,
// PowerShell's SpVoice on Windows. Availability is probed once at startup
// and modelled as an optional capability - when absent, the speak action
// surfaces a notice and no-ops.

use crate::config::SpeechConfig;
use crate::quotes::{Language, Quote};
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Which synthesizer command was found at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// macOS `say`
    Say,
    /// Linux `espeak`
    Espeak,
    /// Linux speech-dispatcher client
    SpdSay,
    /// Windows PowerShell System.Speech
    PowerShell,
}

/// Speech capability, probed once at startup
pub struct Speech {
    backend: Option<Backend>,
    voice_zh: Option<String>,
    voice_en: Option<String>,
}

impl Speech {
    pub fn detect(config: &SpeechConfig) -> Self {
        let backend = if config.enabled {
            detect_backend()
        } else {
            None
        };

        if let Some(backend) = backend {
            tracing::debug!("Speech backend: {backend:?}");
        } else if config.enabled {
            tracing::info!("No speech synthesizer found; speak action disabled");
        }

        Self {
            backend,
            voice_zh: config.voice_zh.clone(),
            voice_en: config.voice_en.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Read the quote aloud, selecting a voice locale from its language tag.
    /// The synthesizer runs detached; we only report spawn failures.
    pub fn speak(&self, quote: &Quote) -> Result<()> {
        let Some(backend) = self.backend else {
            anyhow::bail!("speech synthesis is not available on this system");
        };

        let voice = match quote.language {
            Language::Zh => self.voice_zh.as_deref(),
            Language::En => self.voice_en.as_deref(),
        };

        let mut command = build_command(backend, quote, voice);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to launch speech synthesizer")?;

        Ok(())
    }
}

/// Platform fallback chain, in the same spirit as the $EDITOR lookup
fn detect_backend() -> Option<Backend> {
    if cfg!(target_os = "macos") {
        return Some(Backend::Say);
    }
    if cfg!(windows) {
        return Some(Backend::PowerShell);
    }
    if command_exists("espeak") {
        return Some(Backend::Espeak);
    }
    if command_exists("spd-say") {
        return Some(Backend::SpdSay);
    }
    None
}

fn command_exists(name: &str) -> bool {
    Command::new(name)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn build_command(backend: Backend, quote: &Quote, voice: Option<&str>) -> Command {
    match backend {
        Backend::Say => {
            let mut c = Command::new("say");
            // `say` picks the voice by name; fall back to a locale default
            let voice = voice.unwrap_or(match quote.language {
                Language::Zh => "Tingting",
                Language::En => "Samantha",
            });
            c.arg("-v").arg(voice).arg(&quote.text);
            c
        }
        Backend::Espeak => {
            let mut c = Command::new("espeak");
            let voice = voice.unwrap_or(match quote.language {
                Language::Zh => "zh",
                Language::En => "en",
            });
            c.arg("-v").arg(voice).arg(&quote.text);
            c
        }
        Backend::SpdSay => {
            let mut c = Command::new("spd-say");
            let locale = voice.unwrap_or(match quote.language {
                Language::Zh => "zh",
                Language::En => "en",
            });
            c.arg("-l").arg(locale).arg(&quote.text);
            c
        }
        Backend::PowerShell => {
            let mut c = Command::new("powershell");
            // System.Speech uses the system default voice; an explicit
            // override selects by name. Single quotes in the text are
            // doubled for PowerShell's single-quoted literal syntax.
            let select = voice
                .map(|v| format!("$s.SelectVoice('{v}'); "))
                .unwrap_or_default();
            let text = quote.text.replace('\'', "''");
            let script = format!(
                "Add-Type -AssemblyName System.Speech; \
                 $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                 {select}$s.Speak('{text}')"
            );
            c.arg("-NoProfile").arg("-Command").arg(script);
            c
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Language;

    fn quote(text: &str, language: Language) -> Quote {
        Quote {
            id: None,
            text: text.to_string(),
            author: String::new(),
            source: None,
            language,
        }
    }

    #[test]
    fn test_disabled_config_has_no_backend() {
        let speech = Speech::detect(&SpeechConfig {
            enabled: false,
            voice_zh: None,
            voice_en: None,
        });
        assert!(!speech.is_available());
        assert!(speech.speak(&quote("hi", Language::En)).is_err());
    }

    #[test]
    fn test_voice_selection_follows_language_tag() {
        let zh = build_command(Backend::Say, &quote("你好", Language::Zh), None);
        let args: Vec<_> = zh.get_args().map(|a| a.to_string_lossy()).collect();
        assert!(args.contains(&"Tingting".into()));

        let en = build_command(Backend::Say, &quote("Hello", Language::En), None);
        let args: Vec<_> = en.get_args().map(|a| a.to_string_lossy()).collect();
        assert!(args.contains(&"Samantha".into()));
    }

    #[test]
    fn test_voice_override_wins() {
        let c = build_command(Backend::Espeak, &quote("你好", Language::Zh), Some("zh-yue"));
        let args: Vec<_> = c.get_args().map(|a| a.to_string_lossy()).collect();
        assert!(args.contains(&"zh-yue".into()));
    }
}
