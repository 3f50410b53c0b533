//! The built-in Analysis Lab catalog: four critical-thinking modules.
//!
//! Cause & Effect Explorer (multi-select), Argument Analyzer
//! (single-choice), System Thinker (pair-connect), and Scientific Method
//! Lab (pipeline).

use crate::catalog::ModuleDefinition;
use crate::scenario::{
    ComponentDefinition, MultiSelectScenario, OptionDefinition, PairConnectScenario,
    PipelineScenario, ScenarioDefinition, ScenarioKind, SingleChoiceScenario, StepDefinition,
};

/// All built-in modules in home-screen order.
pub fn builtin_modules() -> Vec<ModuleDefinition> {
    vec![cause_effect(), argument(), systems(), scientific()]
}

fn cause_effect() -> ModuleDefinition {
    ModuleDefinition {
        id: "cause-effect".to_string(),
        title: "Cause & Effect Explorer".to_string(),
        description: "Trace chains of events and understand causality".to_string(),
        kind: ScenarioKind::MultiSelect,
        points: 10,
        scenarios: vec![
            ScenarioDefinition::MultiSelect(MultiSelectScenario {
                situation: "A city notices increased traffic congestion every morning."
                    .to_string(),
                options: vec![
                    OptionDefinition::new(1, "Rapid population growth", true),
                    OptionDefinition::new(2, "More private cars on roads", true),
                    OptionDefinition::new(3, "Warmer weather this week", false),
                    OptionDefinition::new(4, "Inadequate public transport", true),
                    OptionDefinition::new(5, "Ongoing road construction", true),
                    OptionDefinition::new(6, "More people cycling to work", false),
                ],
                explanation: "Traffic congestion has multiple causes: population growth \
                    means more commuters, inadequate public transport pushes people to \
                    drive, and road construction reduces road capacity. Warmer weather \
                    and cycling actually improve traffic!"
                    .to_string(),
            }),
            ScenarioDefinition::MultiSelect(MultiSelectScenario {
                situation: "A local river's fish population has drastically declined."
                    .to_string(),
                options: vec![
                    OptionDefinition::new(1, "Industrial pollution upstream", true),
                    OptionDefinition::new(2, "Overfishing by local boats", true),
                    OptionDefinition::new(3, "Tourism has increased", false),
                    OptionDefinition::new(4, "Destruction of riverside habitat", true),
                    OptionDefinition::new(5, "Invasive species introduced", true),
                    OptionDefinition::new(6, "River was recently cleaned", false),
                ],
                explanation: "Fish decline is caused by pollution, overfishing, habitat \
                    loss, and invasive species competing for food. Tourism and cleaning \
                    actually help the ecosystem!"
                    .to_string(),
            }),
            ScenarioDefinition::MultiSelect(MultiSelectScenario {
                situation: "A student's grades improve significantly over one semester."
                    .to_string(),
                options: vec![
                    OptionDefinition::new(1, "Student joined a study group", true),
                    OptionDefinition::new(2, "Student got a new pencil case", false),
                    OptionDefinition::new(3, "Teacher provided extra support", true),
                    OptionDefinition::new(4, "Student improved sleep habits", true),
                    OptionDefinition::new(5, "Reduced screen time at night", true),
                    OptionDefinition::new(6, "School changed its logo", false),
                ],
                explanation: "Grade improvement comes from meaningful changes: study \
                    groups, teacher support, better sleep, and less screen time. Surface \
                    changes like pencil cases or school logos have no impact!"
                    .to_string(),
            }),
        ],
    }
}

fn argument() -> ModuleDefinition {
    ModuleDefinition {
        id: "argument".to_string(),
        title: "Argument Analyzer".to_string(),
        description: "Break down reasoning and evaluate claims".to_string(),
        kind: ScenarioKind::SingleChoice,
        points: 15,
        scenarios: vec![
            ScenarioDefinition::SingleChoice(SingleChoiceScenario {
                context: "Studies show students who eat breakfast score higher on tests. \
                    Therefore, schools should provide free breakfast to improve academic \
                    performance."
                    .to_string(),
                prompt: "What is the main logical flaw in this argument?".to_string(),
                options: vec![
                    OptionDefinition::new(1, "Correlation mistaken for causation", true)
                        .with_explanation(
                            "Just because breakfast-eaters score higher does not mean \
                             breakfast causes better scores. Family income might explain \
                             both.",
                        ),
                    OptionDefinition::new(2, "The argument is perfectly sound", false)
                        .with_explanation(
                            "The argument has a significant flaw - it assumes a causal \
                             relationship from correlational data.",
                        ),
                    OptionDefinition::new(3, "The sample size is too small", false)
                        .with_explanation(
                            "We have no evidence about sample size. The main issue is the \
                             logical leap from correlation to causation.",
                        ),
                    OptionDefinition::new(4, "Schools cannot afford breakfast", false)
                        .with_explanation(
                            "Cost is not the logical issue here - the problem is the \
                             reasoning itself.",
                        ),
                ],
            }),
            ScenarioDefinition::SingleChoice(SingleChoiceScenario {
                context: "Every successful entrepreneur I have personally met wakes up \
                    before 6 AM. Therefore, waking up early is the key to business \
                    success."
                    .to_string(),
                prompt: "Which logical fallacy is present?".to_string(),
                options: vec![
                    OptionDefinition::new(1, "Hasty generalisation from small sample", true)
                        .with_explanation(
                            "Drawing a universal conclusion from a small, \
                             personally-selected group is hasty generalisation. Many \
                             successful people sleep in!",
                        ),
                    OptionDefinition::new(2, "Appeal to authority", false).with_explanation(
                        "Appeal to authority means using an expert opinion as proof. This \
                         uses personal observation, not authority.",
                    ),
                    OptionDefinition::new(3, "False dichotomy", false).with_explanation(
                        "False dichotomy presents only two options when more exist. This \
                         argument does not do that.",
                    ),
                    OptionDefinition::new(4, "Circular reasoning", false).with_explanation(
                        "Circular reasoning uses the conclusion as a premise. This \
                         argument uses observation as its premise.",
                    ),
                ],
            }),
            ScenarioDefinition::SingleChoice(SingleChoiceScenario {
                context: "We should ban all social media because studies show teenagers \
                    who use social media report feeling lonely."
                    .to_string(),
                prompt: "What analytical problem exists with this conclusion?".to_string(),
                options: vec![
                    OptionDefinition::new(
                        1,
                        "Extreme solution ignoring nuance and alternatives",
                        true,
                    )
                    .with_explanation(
                        "The argument jumps from some teens feeling lonely to banning all \
                         social media for everyone, ignoring that less extreme solutions \
                         exist.",
                    ),
                    OptionDefinition::new(2, "The studies must be fabricated", false)
                        .with_explanation(
                            "There is no reason to doubt the studies. The problem is the \
                             conclusion drawn, not the evidence.",
                        ),
                    OptionDefinition::new(3, "Teenagers should not use the internet", false)
                        .with_explanation(
                            "This is an even more extreme opinion, not a logical analysis \
                             of the argument.",
                        ),
                    OptionDefinition::new(4, "Loneliness is not a real problem", false)
                        .with_explanation(
                            "Loneliness is very real and serious. Dismissing it is not \
                             the analytical flaw here.",
                        ),
                ],
            }),
        ],
    }
}

fn systems() -> ModuleDefinition {
    ModuleDefinition {
        id: "systems".to_string(),
        title: "System Thinker".to_string(),
        description: "See how parts interact in complex systems".to_string(),
        kind: ScenarioKind::PairConnect,
        points: 20,
        scenarios: vec![
            ScenarioDefinition::PairConnect(PairConnectScenario {
                name: "Forest Ecosystem".to_string(),
                description: "Tap one component, then tap another to connect them and \
                    show how they interact."
                    .to_string(),
                components: vec![
                    ComponentDefinition::new("trees", "Trees", &["soil", "animals", "water"]),
                    ComponentDefinition::new("soil", "Soil", &["trees", "water", "decomposers"]),
                    ComponentDefinition::new("water", "Water", &["trees", "animals", "soil"]),
                    ComponentDefinition::new("animals", "Animals", &["trees", "decomposers"]),
                    ComponentDefinition::new("sunlight", "Sunlight", &["trees", "water"]),
                    ComponentDefinition::new("decomposers", "Decomposers", &["soil", "trees"]),
                ],
                insight: "Everything is interconnected! Trees take nutrients from soil \
                    and provide food for animals. Animals spread seeds and create waste \
                    that decomposers break down into nutrients. Sunlight powers the whole \
                    system through photosynthesis. Disrupting ANY part affects EVERYTHING \
                    else!"
                    .to_string(),
            }),
            ScenarioDefinition::PairConnect(PairConnectScenario {
                name: "School Community System".to_string(),
                description: "Connect the components of a school ecosystem that directly \
                    affect each other."
                    .to_string(),
                components: vec![
                    ComponentDefinition::new(
                        "teachers",
                        "Teachers",
                        &["students", "curriculum", "parents"],
                    ),
                    ComponentDefinition::new(
                        "students",
                        "Students",
                        &["teachers", "parents", "resources"],
                    ),
                    ComponentDefinition::new(
                        "parents",
                        "Parents",
                        &["students", "teachers", "funding"],
                    ),
                    ComponentDefinition::new(
                        "funding",
                        "Funding",
                        &["resources", "teachers", "curriculum"],
                    ),
                    ComponentDefinition::new(
                        "resources",
                        "Resources",
                        &["students", "teachers", "curriculum"],
                    ),
                    ComponentDefinition::new(
                        "curriculum",
                        "Curriculum",
                        &["teachers", "students", "resources"],
                    ),
                ],
                insight: "Schools are complex systems! Funding affects resources which \
                    impacts teaching quality. Engaged students motivate teachers and \
                    reassure parents, who advocate for better funding. When one part \
                    struggles, it ripples through everything else."
                    .to_string(),
            }),
        ],
    }
}

fn scientific() -> ModuleDefinition {
    ModuleDefinition {
        id: "scientific".to_string(),
        title: "Scientific Method Lab".to_string(),
        description: "Form hypotheses and test with evidence".to_string(),
        kind: ScenarioKind::Pipeline,
        points: 10,
        scenarios: vec![
            ScenarioDefinition::Pipeline(PipelineScenario {
                title: "The Plant and Light Mystery".to_string(),
                question: "Plants near windows grow taller than those in corners. Why?"
                    .to_string(),
                steps: vec![
                    StepDefinition {
                        name: "Observation".to_string(),
                        prompt: "What have we noticed?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Plants near windows are consistently taller than corner \
                                 plants",
                                true,
                            )
                            .with_explanation(
                                "A good observation is specific and measurable. Noting \
                                 the consistent height difference based on location is \
                                 precise and testable.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Some plants are green and some are not",
                                false,
                            )
                            .with_explanation(
                                "This observation is not relevant to the height \
                                 difference we noticed.",
                            ),
                            OptionDefinition::new(3, "The windows need cleaning", false)
                                .with_explanation(
                                    "This is not a scientific observation relevant to \
                                     plant growth.",
                                ),
                        ],
                    },
                    StepDefinition {
                        name: "Hypothesis".to_string(),
                        prompt: "What testable explanation might explain this?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Plants near windows grow taller because they receive \
                                 more light, which powers photosynthesis",
                                true,
                            )
                            .with_explanation(
                                "A good hypothesis is specific, testable, and based on \
                                 known science. This is scientifically grounded and can \
                                 be tested.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Window plants are happier because they can see outside",
                                false,
                            )
                            .with_explanation(
                                "Happiness is not measurable and this is not \
                                 scientifically testable.",
                            ),
                            OptionDefinition::new(
                                3,
                                "Corner plants are jealous of window plants",
                                false,
                            )
                            .with_explanation(
                                "Plants do not experience emotions. This cannot be tested \
                                 scientifically.",
                            ),
                        ],
                    },
                    StepDefinition {
                        name: "Experiment".to_string(),
                        prompt: "How should we test this hypothesis?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Grow identical plants under different light conditions, \
                                 keeping all other factors the same",
                                true,
                            )
                            .with_explanation(
                                "Controlling all variables except light ensures any \
                                 difference in growth can only be attributed to light. \
                                 This is valid experimental design.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Move all plants to the window and see if they all grow",
                                false,
                            )
                            .with_explanation(
                                "This does not create a comparison group, so we cannot \
                                 isolate the effect of light.",
                            ),
                            OptionDefinition::new(
                                3,
                                "Ask different plants what they prefer and record answers",
                                false,
                            )
                            .with_explanation(
                                "Plants cannot communicate preferences. This is not a \
                                 valid experiment.",
                            ),
                        ],
                    },
                    StepDefinition {
                        name: "Conclusion".to_string(),
                        prompt: "Full light grew 15cm, partial 9cm, no light 3cm. What do \
                            we conclude?"
                            .to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Light significantly increases plant growth, supporting \
                                 our hypothesis - but we should repeat to confirm",
                                true,
                            )
                            .with_explanation(
                                "Good conclusions acknowledge what data shows while \
                                 recognising limitations. Results support (not prove) the \
                                 hypothesis, and replication is essential in science.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Our hypothesis is now a proven fact needing no further \
                                 testing",
                                false,
                            )
                            .with_explanation(
                                "Science never proves things absolutely. Hypotheses are \
                                 supported by evidence, not proven forever.",
                            ),
                            OptionDefinition::new(
                                3,
                                "Plants do not need light since dark ones still grew 3cm",
                                false,
                            )
                            .with_explanation(
                                "The 3cm growth is from stored energy, not evidence \
                                 against needing light. This ignores the dramatic \
                                 difference between groups.",
                            ),
                        ],
                    },
                ],
            }),
            ScenarioDefinition::Pipeline(PipelineScenario {
                title: "The Memory and Music Study".to_string(),
                question: "A student claims classical music while studying helps them \
                    remember more. Is this true?"
                    .to_string(),
                steps: vec![
                    StepDefinition {
                        name: "Observation".to_string(),
                        prompt: "What is the initial claim we need to investigate?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "One student reports better memory recall when studying \
                                 with classical music",
                                true,
                            )
                            .with_explanation(
                                "The observation is the personal report that triggered \
                                 our curiosity. This is anecdotal and needs testing.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Classical music is universally better than all other \
                                 music",
                                false,
                            )
                            .with_explanation(
                                "This is a conclusion, not an observation. We have not \
                                 tested this yet.",
                            ),
                            OptionDefinition::new(
                                3,
                                "All students should listen to music while studying",
                                false,
                            )
                            .with_explanation(
                                "This is a recommendation, not an observation. We need \
                                 evidence first.",
                            ),
                        ],
                    },
                    StepDefinition {
                        name: "Hypothesis".to_string(),
                        prompt: "What is a testable hypothesis?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Students who study with classical music will score \
                                 higher on memory tests than those who study in silence",
                                true,
                            )
                            .with_explanation(
                                "This hypothesis is specific, measurable, and falsifiable \
                                 - the three key qualities of a good scientific \
                                 hypothesis.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Music makes everything better for everyone always",
                                false,
                            )
                            .with_explanation(
                                "This is too vague and absolute to be testable. Good \
                                 hypotheses are specific.",
                            ),
                            OptionDefinition::new(
                                3,
                                "The student must be lying about their experience",
                                false,
                            )
                            .with_explanation(
                                "This is an unfounded accusation, not a scientific \
                                 hypothesis.",
                            ),
                        ],
                    },
                    StepDefinition {
                        name: "Experiment".to_string(),
                        prompt: "Best way to test this fairly?".to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "Randomly assign 60 students to two groups: same \
                                 material, one with music, one without, then test both",
                                true,
                            )
                            .with_explanation(
                                "Random assignment prevents bias, equal conditions ensure \
                                 fairness, and using the same test measures the same \
                                 thing.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Let students choose whether to use music and compare \
                                 their grades",
                                false,
                            )
                            .with_explanation(
                                "Self-selection introduces bias - motivated students \
                                 might both choose music AND study harder.",
                            ),
                            OptionDefinition::new(
                                3,
                                "Ask students if they think music helps and tally \
                                 responses",
                                false,
                            )
                            .with_explanation(
                                "Opinion surveys measure beliefs, not actual memory \
                                 performance.",
                            ),
                        ],
                    },
                    StepDefinition {
                        name: "Conclusion".to_string(),
                        prompt: "Music group averaged 72%, silence group averaged 71%. \
                            What is the right conclusion?"
                            .to_string(),
                        options: vec![
                            OptionDefinition::new(
                                1,
                                "The 1% difference is too small to be meaningful - we \
                                 cannot conclude music helps",
                                true,
                            )
                            .with_explanation(
                                "A 1% difference is statistically insignificant and could \
                                 be due to chance. Good science requires meaningful \
                                 differences confirmed by statistical tests.",
                            ),
                            OptionDefinition::new(
                                2,
                                "Music group won so classical music definitely improves \
                                 memory",
                                false,
                            )
                            .with_explanation(
                                "A 1% difference is not meaningful. This would be \
                                 overstating the evidence significantly.",
                            ),
                            OptionDefinition::new(
                                3,
                                "Silence is proven to be better for studying",
                                false,
                            )
                            .with_explanation(
                                "The silence group did not meaningfully outperform \
                                 either. We cannot draw this conclusion from a 1% \
                                 difference.",
                            ),
                        ],
                    },
                ],
            }),
        ],
    }
}
