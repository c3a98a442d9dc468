use crate::types::{AnalysisResult, ImageFile};

/// Returns true for MIME types the upload path accepts.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Observable phase of the workflow, derived from the session fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Analyzing,
    Complete,
}

/// The whole UI session as one record, mutated only through the transition
/// methods below so each transition is testable on its own.
///
/// The two serial counters guard the asynchronous completions: a preview
/// decode or an analysis timer started under an older serial is discarded
/// when it lands, so a stale decode can never overwrite a newer preview and
/// a timer surviving a reset can never resurrect the cleared session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub image: Option<ImageFile>,
    pub preview: Option<String>,
    pub result: Option<AnalysisResult>,
    pub analyzing: bool,
    pub drag_hover: bool,
    decode_serial: u64,
    run_serial: u64,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.analyzing {
            Phase::Analyzing
        } else if self.result.is_some() {
            Phase::Complete
        } else if self.image.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Store an accepted image, replacing any prior selection wholesale.
    /// A displayed result or running analysis is left untouched; only the
    /// next `begin_analysis` or `reset` clears it.
    /// Returns the token the matching preview decode must present.
    pub fn accept_file(&mut self, file: ImageFile) -> u64 {
        self.image = Some(file);
        self.preview = None;
        self.decode_serial += 1;
        self.decode_serial
    }

    /// Apply a finished preview decode. A decode belonging to a superseded
    /// selection (or to a session that was reset) is dropped.
    pub fn apply_preview(&mut self, token: u64, data_url: String) {
        if token == self.decode_serial && self.image.is_some() {
            self.preview = Some(data_url);
        }
    }

    /// Start an analysis run. No-op (returns `None`) when no image is
    /// selected or a run is already in flight; otherwise returns the token
    /// the completion must present.
    pub fn begin_analysis(&mut self) -> Option<u64> {
        if self.image.is_none() || self.analyzing {
            return None;
        }
        self.analyzing = true;
        self.result = None;
        Some(self.run_serial)
    }

    /// Apply a finished analysis run. Completions raced by a reset carry a
    /// stale token and are dropped.
    pub fn complete_analysis(&mut self, token: u64, result: AnalysisResult) {
        if self.analyzing && token == self.run_serial {
            self.result = Some(result);
            self.analyzing = false;
        }
    }

    /// Abandon an analysis run that failed. Same staleness rule as
    /// `complete_analysis`.
    pub fn fail_analysis(&mut self, token: u64) {
        if self.analyzing && token == self.run_serial {
            self.analyzing = false;
        }
    }

    /// Return to the initial empty screen from any state. Both serials are
    /// bumped so every in-flight completion lands stale.
    pub fn reset(&mut self) {
        *self = SessionState {
            decode_serial: self.decode_serial + 1,
            run_serial: self.run_serial + 1,
            ..SessionState::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::document_analysis_result;

    fn png(name: &str) -> ImageFile {
        ImageFile {
            name: name.into(),
            size_bytes: 2.0 * 1024.0 * 1024.0,
            mime: "image/png".into(),
        }
    }

    #[test]
    fn test_image_mime_predicate() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_initial_state_is_idle() {
        let s = SessionState::default();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.image.is_none());
        assert!(s.preview.is_none());
        assert!(s.result.is_none());
        assert!(!s.analyzing);
        assert!(!s.drag_hover);
    }

    #[test]
    fn test_accept_then_preview() {
        let mut s = SessionState::default();
        let token = s.accept_file(png("photo.png"));
        assert_eq!(s.phase(), Phase::Ready);
        assert_eq!(s.image.as_ref().unwrap().name, "photo.png");
        assert!(s.preview.is_none());

        s.apply_preview(token, "data:image/png;base64,AAAA".into());
        assert!(s.preview.is_some());
    }

    #[test]
    fn test_stale_preview_is_discarded() {
        let mut s = SessionState::default();
        let old_token = s.accept_file(png("first.png"));
        let new_token = s.accept_file(png("second.png"));

        // The first file's decode finishes after the second was selected
        s.apply_preview(old_token, "data:first".into());
        assert!(s.preview.is_none());

        s.apply_preview(new_token, "data:second".into());
        assert_eq!(s.preview.as_deref(), Some("data:second"));
    }

    #[test]
    fn test_preview_after_reset_is_discarded() {
        let mut s = SessionState::default();
        let token = s.accept_file(png("photo.png"));
        s.reset();
        s.apply_preview(token, "data:stale".into());
        assert!(s.preview.is_none());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_new_selection_replaces_wholesale() {
        let mut s = SessionState::default();
        let token = s.accept_file(png("first.png"));
        s.apply_preview(token, "data:first".into());

        s.accept_file(png("second.png"));
        assert_eq!(s.image.as_ref().unwrap().name, "second.png");
        assert!(s.preview.is_none());
    }

    #[test]
    fn test_new_selection_keeps_displayed_result() {
        let mut s = SessionState::default();
        s.accept_file(png("first.png"));
        let token = s.begin_analysis().unwrap();
        s.complete_analysis(token, document_analysis_result());

        // Selecting another file leaves the result on screen until the
        // next analysis run starts
        s.accept_file(png("second.png"));
        assert!(s.result.is_some());
        assert_eq!(s.phase(), Phase::Complete);

        s.begin_analysis().unwrap();
        assert!(s.result.is_none());
        assert_eq!(s.phase(), Phase::Analyzing);
    }

    #[test]
    fn test_new_selection_keeps_running_analysis() {
        let mut s = SessionState::default();
        s.accept_file(png("first.png"));
        let token = s.begin_analysis().unwrap();

        s.accept_file(png("second.png"));
        assert!(s.analyzing);

        // The in-flight run still completes
        s.complete_analysis(token, document_analysis_result());
        assert_eq!(s.phase(), Phase::Complete);
    }

    #[test]
    fn test_analyze_without_file_is_noop() {
        let mut s = SessionState::default();
        assert!(s.begin_analysis().is_none());
        assert!(!s.analyzing);
        assert!(s.result.is_none());
    }

    #[test]
    fn test_analyze_guard_while_running() {
        let mut s = SessionState::default();
        s.accept_file(png("photo.png"));
        assert!(s.begin_analysis().is_some());
        assert!(s.begin_analysis().is_none());
    }

    #[test]
    fn test_full_run_produces_fixed_result() {
        let mut s = SessionState::default();
        let decode = s.accept_file(png("photo.png"));
        s.apply_preview(decode, "data:image/png;base64,AAAA".into());

        let token = s.begin_analysis().unwrap();
        assert_eq!(s.phase(), Phase::Analyzing);
        assert!(s.result.is_none());

        s.complete_analysis(token, document_analysis_result());
        assert_eq!(s.phase(), Phase::Complete);
        assert!(!s.analyzing);

        let result = s.result.as_ref().unwrap();
        assert_eq!(result.category, "Document Analysis");
        assert_eq!(result.confidence, 94.7);
        assert_eq!(result.tags.len(), 5);
        assert_eq!(result.tags[0], "Document");
        assert_eq!(result.insights.len(), 4);
    }

    #[test]
    fn test_result_cleared_when_reanalyzing() {
        let mut s = SessionState::default();
        s.accept_file(png("photo.png"));
        let token = s.begin_analysis().unwrap();
        s.complete_analysis(token, document_analysis_result());

        s.begin_analysis().unwrap();
        assert!(s.result.is_none());
        assert!(s.analyzing);
    }

    #[test]
    fn test_reset_during_analysis_drops_timer_result() {
        let mut s = SessionState::default();
        s.accept_file(png("photo.png"));
        let token = s.begin_analysis().unwrap();
        s.reset();

        // The 3 s timer still fires, but must not repopulate the session
        s.complete_analysis(token, document_analysis_result());
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.result.is_none());
        assert!(!s.analyzing);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = SessionState::default();
        let decode = s.accept_file(png("photo.png"));
        s.apply_preview(decode, "data:image/png;base64,AAAA".into());
        let token = s.begin_analysis().unwrap();
        s.complete_analysis(token, document_analysis_result());
        s.drag_hover = true;

        s.reset();
        assert!(s.image.is_none());
        assert!(s.preview.is_none());
        assert!(s.result.is_none());
        assert!(!s.analyzing);
        assert!(!s.drag_hover);

        // Re-selecting the identical file still works
        let decode = s.accept_file(png("photo.png"));
        s.apply_preview(decode, "data:image/png;base64,AAAA".into());
        assert_eq!(s.phase(), Phase::Ready);
        assert!(s.preview.is_some());
    }

    #[test]
    fn test_failed_analysis_clears_flag_only() {
        let mut s = SessionState::default();
        s.accept_file(png("photo.png"));
        let token = s.begin_analysis().unwrap();
        s.fail_analysis(token);
        assert!(!s.analyzing);
        assert!(s.result.is_none());
        assert_eq!(s.phase(), Phase::Ready);
    }
}
