//! WebAudio analysis graph: media source -> gain -> analyser -> destination.
//!
//! The analyser feeds the per-frame spectrum sample; everything else is
//! plumbing. A media element can be bound to a source node only once per
//! AudioContext, so swapping the file tears the whole graph down and
//! rebuilds it (`reattach_source`).

use app_core::band_energy;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FFT_SIZE: u32 = 1024;
const DEMO_TONE_GAIN: f32 = 0.02;
const DEMO_MELODY_HZ: [f32; 6] = [220.0, 246.94, 261.63, 293.66, 329.63, 392.0];
const DEMO_STEP_MS: i32 = 400;
const DEMO_RAMP_SEC: f64 = 0.2;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

struct DemoTone {
    osc: web::OscillatorNode,
    interval_id: i32,
    // kept alive for the lifetime of the tone
    _step: Closure<dyn FnMut()>,
}

pub struct AudioGraph {
    ctx: web::AudioContext,
    gain: web::GainNode,
    analyser: web::AnalyserNode,
    _source: web::MediaElementAudioSourceNode,
    media: web::HtmlMediaElement,
    demo: Option<DemoTone>,
}

impl AudioGraph {
    pub fn build(media: &web::HtmlMediaElement, volume: f32) -> Result<Self, ()> {
        let ctx = web::AudioContext::new().map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
        })?;
        let analyser = ctx.create_analyser().map_err(|e| {
            log::error!("AnalyserNode error: {:?}", e);
        })?;
        analyser.set_fft_size(FFT_SIZE);
        let gain = create_gain(&ctx, volume, "volume")?;
        let source = ctx.create_media_element_source(media).map_err(|e| {
            log::error!("MediaElementAudioSourceNode error: {:?}", e);
        })?;
        let _ = source.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&analyser);
        let _ = analyser.connect_with_audio_node(&ctx.destination());
        Ok(Self {
            ctx,
            gain,
            analyser,
            _source: source,
            media: media.clone(),
            demo: None,
        })
    }

    /// Browsers keep a fresh context suspended until a user gesture.
    pub fn resume_if_suspended(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    pub fn set_volume(&self, volume: f32) {
        self.gain.gain().set_value(volume);
    }

    /// True while audio is actually flowing through the analysis path.
    pub fn is_active(&self) -> bool {
        self.ctx.state() == web::AudioContextState::Running
            && (self.demo.is_some() || !self.media.paused())
    }

    /// Overwrite `buf` with this frame's byte frequency data and reduce it
    /// to one band energy. `None` while the graph is idle.
    pub fn sample_energy(&self, buf: &mut Vec<u8>) -> Option<f32> {
        if !self.is_active() {
            return None;
        }
        let bins = self.analyser.frequency_bin_count() as usize;
        if buf.len() != bins {
            buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(buf);
        band_energy(buf)
    }

    /// Quiet synthesized fallback when no file is loaded: a sine voice
    /// stepping through a short melody, routed through the analyser so the
    /// visuals still react. Idempotent while already running.
    pub fn start_demo_tone(&mut self) {
        if self.demo.is_some() {
            return;
        }
        let osc = match web::OscillatorNode::new(&self.ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("OscillatorNode error: {:?}", e);
                return;
            }
        };
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(DEMO_MELODY_HZ[0]);
        let Ok(osc_gain) = create_gain(&self.ctx, DEMO_TONE_GAIN, "demo tone") else {
            return;
        };
        let _ = osc.connect_with_audio_node(&osc_gain);
        let _ = osc_gain.connect_with_audio_node(&self.analyser);
        let _ = osc.start();

        let ctx_step = self.ctx.clone();
        let osc_step = osc.clone();
        let mut step_index = 0usize;
        let step = Closure::wrap(Box::new(move || {
            step_index = (step_index + 1) % DEMO_MELODY_HZ.len();
            let at = ctx_step.current_time() + DEMO_RAMP_SEC;
            let _ = osc_step
                .frequency()
                .linear_ramp_to_value_at_time(DEMO_MELODY_HZ[step_index], at);
        }) as Box<dyn FnMut()>);
        let interval_id = match web::window().map(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                step.as_ref().unchecked_ref(),
                DEMO_STEP_MS,
            )
        }) {
            Some(Ok(id)) => id,
            _ => {
                log::error!("demo tone interval error");
                let _ = osc.stop();
                return;
            }
        };
        self.demo = Some(DemoTone {
            osc,
            interval_id,
            _step: step,
        });
    }

    pub fn stop_demo_tone(&mut self) {
        if let Some(demo) = self.demo.take() {
            let _ = demo.osc.stop();
            let _ = demo.osc.disconnect();
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(demo.interval_id);
            }
        }
    }

    /// Swap the media source with a defined order: stop old -> close ->
    /// build new -> resume. Safe to call repeatedly; each call yields a
    /// freshly wired graph.
    pub fn reattach_source(
        mut self,
        media: &web::HtmlMediaElement,
        volume: f32,
    ) -> Result<Self, ()> {
        self.stop_demo_tone();
        let _ = self.ctx.close();
        let next = Self::build(media, volume)?;
        next.resume_if_suspended();
        Ok(next)
    }
}
