use super::{Criterion, Level};

const NONE: &[&str] = &[];

pub(super) const CRITERIA: &[Criterion] = &[
    // 1. Perceivable
    Criterion {
        id: "1.1.1",
        name: "Non-text Content",
        level: Level::A,
        description: "All non-text content that is presented to the user has a text alternative that serves the equivalent purpose.",
        rule_ids: &[
            "image-alt",
            "input-image-alt",
            "area-alt",
            "object-alt",
            "svg-img-alt",
        ],
        can_automate: true,
    },
    Criterion {
        id: "1.2.1",
        name: "Audio-only and Video-only (Prerecorded)",
        level: Level::A,
        description: "Prerecorded audio-only and video-only media have an alternative that presents equivalent information.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.2.2",
        name: "Captions (Prerecorded)",
        level: Level::A,
        description: "Captions are provided for all prerecorded audio content in synchronized media.",
        rule_ids: &["video-caption"],
        can_automate: false,
    },
    Criterion {
        id: "1.2.3",
        name: "Audio Description or Media Alternative (Prerecorded)",
        level: Level::A,
        description: "An alternative for time-based media or audio description of the prerecorded video content is provided.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.2.4",
        name: "Captions (Live)",
        level: Level::AA,
        description: "Captions are provided for all live audio content in synchronized media.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.2.5",
        name: "Audio Description (Prerecorded)",
        level: Level::AA,
        description: "Audio description is provided for all prerecorded video content in synchronized media.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.3.1",
        name: "Info and Relationships",
        level: Level::A,
        description: "Information, structure, and relationships conveyed through presentation can be programmatically determined or are available in text.",
        rule_ids: &[
            "definition-list",
            "dlitem",
            "list",
            "listitem",
            "table-fake-caption",
            "td-headers-attr",
            "th-has-data-cells",
            "empty-table-header",
            "scope-attr-valid",
            "p-as-heading",
        ],
        can_automate: true,
    },
    Criterion {
        id: "1.3.2",
        name: "Meaningful Sequence",
        level: Level::A,
        description: "When the sequence in which content is presented affects its meaning, a correct reading sequence can be programmatically determined.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.3.3",
        name: "Sensory Characteristics",
        level: Level::A,
        description: "Instructions for understanding and operating content do not rely solely on sensory characteristics of components.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.3.4",
        name: "Orientation",
        level: Level::AA,
        description: "Content does not restrict its view and operation to a single display orientation unless essential.",
        rule_ids: &["css-orientation-lock"],
        can_automate: true,
    },
    Criterion {
        id: "1.3.5",
        name: "Identify Input Purpose",
        level: Level::AA,
        description: "The purpose of each input field collecting information about the user can be programmatically determined.",
        rule_ids: &["autocomplete-valid"],
        can_automate: true,
    },
    Criterion {
        id: "1.4.1",
        name: "Use of Color",
        level: Level::A,
        description: "Color is not used as the only visual means of conveying information, indicating an action, prompting a response, or distinguishing a visual element.",
        rule_ids: &["link-in-text-block"],
        can_automate: false,
    },
    Criterion {
        id: "1.4.2",
        name: "Audio Control",
        level: Level::A,
        description: "If any audio plays automatically for more than 3 seconds, a mechanism is available to pause or stop it or to control its volume.",
        rule_ids: &["no-autoplay-audio"],
        can_automate: false,
    },
    Criterion {
        id: "1.4.3",
        name: "Contrast (Minimum)",
        level: Level::AA,
        description: "The visual presentation of text and images of text has a contrast ratio of at least 4.5:1.",
        rule_ids: &["color-contrast"],
        can_automate: true,
    },
    Criterion {
        id: "1.4.4",
        name: "Resize Text",
        level: Level::AA,
        description: "Text can be resized without assistive technology up to 200 percent without loss of content or functionality.",
        rule_ids: &["meta-viewport"],
        can_automate: true,
    },
    Criterion {
        id: "1.4.5",
        name: "Images of Text",
        level: Level::AA,
        description: "If the technologies being used can achieve the visual presentation, text is used to convey information rather than images of text.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.4.10",
        name: "Reflow",
        level: Level::AA,
        description: "Content can be presented without loss of information or functionality, and without requiring scrolling in two dimensions.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.4.11",
        name: "Non-text Contrast",
        level: Level::AA,
        description: "User interface components and graphical objects have a contrast ratio of at least 3:1 against adjacent colors.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "1.4.12",
        name: "Text Spacing",
        level: Level::AA,
        description: "No loss of content or functionality occurs when users override line height, paragraph, letter, and word spacing.",
        rule_ids: &["avoid-inline-spacing"],
        can_automate: true,
    },
    Criterion {
        id: "1.4.13",
        name: "Content on Hover or Focus",
        level: Level::AA,
        description: "Additional content triggered by pointer hover or keyboard focus is dismissible, hoverable, and persistent.",
        rule_ids: NONE,
        can_automate: false,
    },
    // 2. Operable
    Criterion {
        id: "2.1.1",
        name: "Keyboard",
        level: Level::A,
        description: "All functionality of the content is operable through a keyboard interface.",
        rule_ids: &["scrollable-region-focusable", "frame-focusable-content"],
        can_automate: false,
    },
    Criterion {
        id: "2.1.2",
        name: "No Keyboard Trap",
        level: Level::A,
        description: "If keyboard focus can be moved to a component, focus can be moved away from that component using only a keyboard interface.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.1.4",
        name: "Character Key Shortcuts",
        level: Level::A,
        description: "Single character key shortcuts can be turned off, remapped, or are active only on focus.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.2.1",
        name: "Timing Adjustable",
        level: Level::A,
        description: "For each time limit set by the content, the user can turn off, adjust, or extend it.",
        rule_ids: &["meta-refresh"],
        can_automate: false,
    },
    Criterion {
        id: "2.2.2",
        name: "Pause, Stop, Hide",
        level: Level::A,
        description: "Moving, blinking, scrolling, or auto-updating information can be paused, stopped, or hidden by the user.",
        rule_ids: &["blink", "marquee"],
        can_automate: false,
    },
    Criterion {
        id: "2.3.1",
        name: "Three Flashes or Below Threshold",
        level: Level::A,
        description: "Web pages do not contain anything that flashes more than three times in any one second period.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.4.1",
        name: "Bypass Blocks",
        level: Level::A,
        description: "A mechanism is available to bypass blocks of content that are repeated on multiple web pages.",
        rule_ids: &["bypass", "region"],
        can_automate: true,
    },
    Criterion {
        id: "2.4.2",
        name: "Page Titled",
        level: Level::A,
        description: "Web pages have titles that describe topic or purpose.",
        rule_ids: &["document-title"],
        can_automate: true,
    },
    Criterion {
        id: "2.4.3",
        name: "Focus Order",
        level: Level::A,
        description: "Focusable components receive focus in an order that preserves meaning and operability.",
        rule_ids: &["tabindex"],
        can_automate: false,
    },
    Criterion {
        id: "2.4.4",
        name: "Link Purpose (In Context)",
        level: Level::A,
        description: "The purpose of each link can be determined from the link text alone or together with its programmatically determined link context.",
        rule_ids: &["link-name"],
        can_automate: true,
    },
    Criterion {
        id: "2.4.5",
        name: "Multiple Ways",
        level: Level::AA,
        description: "More than one way is available to locate a web page within a set of web pages.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.4.6",
        name: "Headings and Labels",
        level: Level::AA,
        description: "Headings and labels describe topic or purpose.",
        rule_ids: &["empty-heading"],
        can_automate: false,
    },
    Criterion {
        id: "2.4.7",
        name: "Focus Visible",
        level: Level::AA,
        description: "Any keyboard operable user interface has a mode of operation where the keyboard focus indicator is visible.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.4.11",
        name: "Focus Not Obscured (Minimum)",
        level: Level::AA,
        description: "When a component receives keyboard focus, it is not entirely hidden due to author-created content.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.5.1",
        name: "Pointer Gestures",
        level: Level::A,
        description: "Functionality that uses multipoint or path-based gestures can be operated with a single pointer without a path-based gesture.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.5.2",
        name: "Pointer Cancellation",
        level: Level::A,
        description: "For functionality operated using a single pointer, completion of the function is not triggered on the down-event alone.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.5.3",
        name: "Label in Name",
        level: Level::A,
        description: "For components with labels that include text or images of text, the accessible name contains the visible text.",
        rule_ids: &["label-content-name-mismatch"],
        can_automate: false,
    },
    Criterion {
        id: "2.5.4",
        name: "Motion Actuation",
        level: Level::A,
        description: "Functionality operated by device or user motion can also be operated by user interface components and can be disabled.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.5.7",
        name: "Dragging Movements",
        level: Level::AA,
        description: "Functionality that uses a dragging movement can be achieved by a single pointer without dragging.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "2.5.8",
        name: "Target Size (Minimum)",
        level: Level::AA,
        description: "The size of the target for pointer inputs is at least 24 by 24 CSS pixels, except where exempted.",
        rule_ids: &["target-size"],
        can_automate: true,
    },
    // 3. Understandable
    Criterion {
        id: "3.1.1",
        name: "Language of Page",
        level: Level::A,
        description: "The default human language of each web page can be programmatically determined.",
        rule_ids: &["html-has-lang", "html-lang-valid"],
        can_automate: true,
    },
    Criterion {
        id: "3.1.2",
        name: "Language of Parts",
        level: Level::AA,
        description: "The human language of each passage or phrase in the content can be programmatically determined.",
        rule_ids: &["valid-lang"],
        can_automate: true,
    },
    Criterion {
        id: "3.2.1",
        name: "On Focus",
        level: Level::A,
        description: "When any user interface component receives focus, it does not initiate a change of context.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.2.2",
        name: "On Input",
        level: Level::A,
        description: "Changing the setting of any user interface component does not automatically cause a change of context unless the user has been advised.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.2.3",
        name: "Consistent Navigation",
        level: Level::AA,
        description: "Navigational mechanisms that are repeated on multiple web pages occur in the same relative order each time they are repeated.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.2.4",
        name: "Consistent Identification",
        level: Level::AA,
        description: "Components that have the same functionality within a set of web pages are identified consistently.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.2.6",
        name: "Consistent Help",
        level: Level::A,
        description: "Help mechanisms repeated on multiple web pages occur in the same relative order.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.3.1",
        name: "Error Identification",
        level: Level::A,
        description: "If an input error is automatically detected, the item in error is identified and the error is described to the user in text.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.3.2",
        name: "Labels or Instructions",
        level: Level::A,
        description: "Labels or instructions are provided when content requires user input.",
        rule_ids: &["form-field-multiple-labels"],
        can_automate: false,
    },
    Criterion {
        id: "3.3.3",
        name: "Error Suggestion",
        level: Level::AA,
        description: "If an input error is automatically detected and suggestions for correction are known, the suggestions are provided to the user.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.3.4",
        name: "Error Prevention (Legal, Financial, Data)",
        level: Level::AA,
        description: "Submissions that cause legal commitments or financial transactions are reversible, checked, or confirmed.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.3.7",
        name: "Redundant Entry",
        level: Level::A,
        description: "Information previously entered by or provided to the user that is required again in the same process is auto-populated or available to select.",
        rule_ids: NONE,
        can_automate: false,
    },
    Criterion {
        id: "3.3.8",
        name: "Accessible Authentication (Minimum)",
        level: Level::AA,
        description: "A cognitive function test is not required for any step in an authentication process unless an alternative is provided.",
        rule_ids: NONE,
        can_automate: false,
    },
    // 4. Robust
    Criterion {
        id: "4.1.2",
        name: "Name, Role, Value",
        level: Level::A,
        description: "For all user interface components, the name and role can be programmatically determined and states, properties, and values can be set.",
        rule_ids: &[
            "aria-allowed-attr",
            "aria-command-name",
            "aria-deprecated-role",
            "aria-hidden-body",
            "aria-hidden-focus",
            "aria-input-field-name",
            "aria-meter-name",
            "aria-progressbar-name",
            "aria-prohibited-attr",
            "aria-required-attr",
            "aria-required-children",
            "aria-required-parent",
            "aria-roles",
            "aria-toggle-field-name",
            "aria-tooltip-name",
            "aria-valid-attr",
            "aria-valid-attr-value",
            "button-name",
            "frame-title",
            "frame-title-unique",
            "input-button-name",
            "label",
            "nested-interactive",
            "select-name",
        ],
        can_automate: true,
    },
    Criterion {
        id: "4.1.3",
        name: "Status Messages",
        level: Level::AA,
        description: "Status messages can be programmatically determined through role or properties so they can be presented without receiving focus.",
        rule_ids: &["aria-live-region-attr"],
        can_automate: false,
    },
];
