use crate::{Equipment, ExerciseDefinition, MuscleGroup, Property};

/// All exercises the generator can choose from, grouped by primary muscle group.
pub static EXERCISES: [ExerciseDefinition; 59] = [
    // Chest
    ExerciseDefinition::new(
        "Barbell Bench Press",
        MuscleGroup::Chest,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+bench+press",
        72,
    ),
    ExerciseDefinition::new(
        "Barbell Incline Bench Press",
        MuscleGroup::Chest,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+incline+bench+press",
        72,
    ),
    ExerciseDefinition::new(
        "Cable Crossover",
        MuscleGroup::Chest,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+crossover",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Bench Press",
        MuscleGroup::Chest,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+bench+press",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Fly",
        MuscleGroup::Chest,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+fly",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Incline Bench Press",
        MuscleGroup::Chest,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+incline+bench+press",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Chest Press",
        MuscleGroup::Chest,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+chest+press",
        72,
    ),
    ExerciseDefinition::new(
        "Push-Up",
        MuscleGroup::Chest,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=push-up",
        72,
    ),
    // Back
    ExerciseDefinition::new(
        "Band Pull Apart",
        MuscleGroup::Back,
        Equipment::Band,
        "https://www.youtube.com/results?search_query=band+pull+apart",
        72,
    ),
    ExerciseDefinition::new(
        "Barbell Bent-Over Row",
        MuscleGroup::Back,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+bent-over+row",
        96,
    ),
    ExerciseDefinition::new(
        "Cable Lat Pulldown",
        MuscleGroup::Back,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+lat+pulldown",
        72,
    ),
    ExerciseDefinition::new(
        "Cable Seated Row",
        MuscleGroup::Back,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+seated+row",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell One-Arm Row",
        MuscleGroup::Back,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+one-arm+row",
        72,
    ),
    ExerciseDefinition::new(
        "Machine T-Bar Row",
        MuscleGroup::Back,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+t-bar+row",
        72,
    ),
    ExerciseDefinition::new(
        "Pull-Up",
        MuscleGroup::Back,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=pull-up",
        72,
    ),
    // Shoulders
    ExerciseDefinition::new(
        "Barbell Overhead Press",
        MuscleGroup::Shoulders,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+overhead+press",
        72,
    ),
    ExerciseDefinition::new(
        "Cable Face Pull",
        MuscleGroup::Shoulders,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+face+pull",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Lateral Raise",
        MuscleGroup::Shoulders,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+lateral+raise",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Shoulder Press",
        MuscleGroup::Shoulders,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+shoulder+press",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Reverse Fly",
        MuscleGroup::Shoulders,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+reverse+fly",
        72,
    ),
    ExerciseDefinition::new(
        "Pike Push-Up",
        MuscleGroup::Shoulders,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=pike+push-up",
        72,
    ),
    // Arms
    ExerciseDefinition::new(
        "Barbell Curl",
        MuscleGroup::Arms,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+curl",
        72,
    ),
    ExerciseDefinition::new(
        "Barbell Skull Crusher",
        MuscleGroup::Arms,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+skull+crusher",
        72,
    ),
    ExerciseDefinition::new(
        "Bench Dip",
        MuscleGroup::Arms,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=bench+dip",
        72,
    ),
    ExerciseDefinition::new(
        "Cable Triceps Pushdown",
        MuscleGroup::Arms,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+triceps+pushdown",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Hammer Curl",
        MuscleGroup::Arms,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+hammer+curl",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Overhead Triceps Extension",
        MuscleGroup::Arms,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+overhead+triceps+extension",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Preacher Curl",
        MuscleGroup::Arms,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+preacher+curl",
        72,
    ),
    // Core
    ExerciseDefinition::new(
        "Ab Wheel Rollout",
        MuscleGroup::Core,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=ab+wheel+rollout",
        48,
    ),
    ExerciseDefinition::new(
        "Band Pallof Press",
        MuscleGroup::Core,
        Equipment::Band,
        "https://www.youtube.com/results?search_query=band+pallof+press",
        48,
    ),
    ExerciseDefinition::new(
        "Cable Crunch",
        MuscleGroup::Core,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+crunch",
        48,
    ),
    ExerciseDefinition::new(
        "Dead Bug",
        MuscleGroup::Core,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=dead+bug",
        48,
    ),
    ExerciseDefinition::new(
        "Dumbbell Russian Twist",
        MuscleGroup::Core,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+russian+twist",
        48,
    ),
    ExerciseDefinition::new(
        "Hanging Leg Raise",
        MuscleGroup::Core,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=hanging+leg+raise",
        48,
    ),
    ExerciseDefinition::new(
        "Plank",
        MuscleGroup::Core,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=plank",
        48,
    ),
    // Quads
    ExerciseDefinition::new(
        "Barbell Back Squat",
        MuscleGroup::Quads,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+back+squat",
        96,
    ),
    ExerciseDefinition::new(
        "Barbell Front Squat",
        MuscleGroup::Quads,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+front+squat",
        96,
    ),
    ExerciseDefinition::new(
        "Dumbbell Bulgarian Split Squat",
        MuscleGroup::Quads,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+bulgarian+split+squat",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Goblet Squat",
        MuscleGroup::Quads,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+goblet+squat",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Leg Extension",
        MuscleGroup::Quads,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+leg+extension",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Leg Press",
        MuscleGroup::Quads,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+leg+press",
        72,
    ),
    ExerciseDefinition::new(
        "Walking Lunge",
        MuscleGroup::Quads,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=walking+lunge",
        72,
    ),
    // Hamstrings
    ExerciseDefinition::new(
        "Barbell Romanian Deadlift",
        MuscleGroup::Hamstrings,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+romanian+deadlift",
        96,
    ),
    ExerciseDefinition::new(
        "Dumbbell Stiff-Leg Deadlift",
        MuscleGroup::Hamstrings,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+stiff-leg+deadlift",
        72,
    ),
    ExerciseDefinition::new(
        "Kettlebell Swing",
        MuscleGroup::Hamstrings,
        Equipment::Kettlebell,
        "https://www.youtube.com/results?search_query=kettlebell+swing",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Lying Leg Curl",
        MuscleGroup::Hamstrings,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+lying+leg+curl",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Seated Leg Curl",
        MuscleGroup::Hamstrings,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+seated+leg+curl",
        72,
    ),
    ExerciseDefinition::new(
        "Nordic Curl",
        MuscleGroup::Hamstrings,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=nordic+curl",
        72,
    ),
    // Glutes
    ExerciseDefinition::new(
        "Band Lateral Walk",
        MuscleGroup::Glutes,
        Equipment::Band,
        "https://www.youtube.com/results?search_query=band+lateral+walk",
        72,
    ),
    ExerciseDefinition::new(
        "Barbell Glute Bridge",
        MuscleGroup::Glutes,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+glute+bridge",
        72,
    ),
    ExerciseDefinition::new(
        "Barbell Hip Thrust",
        MuscleGroup::Glutes,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+hip+thrust",
        72,
    ),
    ExerciseDefinition::new(
        "Cable Kickback",
        MuscleGroup::Glutes,
        Equipment::Cable,
        "https://www.youtube.com/results?search_query=cable+kickback",
        72,
    ),
    ExerciseDefinition::new(
        "Dumbbell Step-Up",
        MuscleGroup::Glutes,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+step-up",
        72,
    ),
    ExerciseDefinition::new(
        "Machine Hip Abduction",
        MuscleGroup::Glutes,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+hip+abduction",
        72,
    ),
    // Calves
    ExerciseDefinition::new(
        "Barbell Calf Raise",
        MuscleGroup::Calves,
        Equipment::Barbell,
        "https://www.youtube.com/results?search_query=barbell+calf+raise",
        48,
    ),
    ExerciseDefinition::new(
        "Dumbbell Single-Leg Calf Raise",
        MuscleGroup::Calves,
        Equipment::Dumbbell,
        "https://www.youtube.com/results?search_query=dumbbell+single-leg+calf+raise",
        48,
    ),
    ExerciseDefinition::new(
        "Machine Seated Calf Raise",
        MuscleGroup::Calves,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+seated+calf+raise",
        48,
    ),
    ExerciseDefinition::new(
        "Machine Standing Calf Raise",
        MuscleGroup::Calves,
        Equipment::Machine,
        "https://www.youtube.com/results?search_query=machine+standing+calf+raise",
        48,
    ),
    ExerciseDefinition::new(
        "Pogo Hop",
        MuscleGroup::Calves,
        Equipment::Bodyweight,
        "https://www.youtube.com/results?search_query=pogo+hop",
        48,
    ),
];

#[must_use]
pub fn exercise(name: &str) -> Option<&'static ExerciseDefinition> {
    EXERCISES.iter().find(|e| e.name == name)
}

/// Exercises whose primary muscle group matches `name`, ignoring case.
#[must_use]
pub fn exercises_for<'a>(
    catalog: &'a [ExerciseDefinition],
    name: &str,
) -> Vec<&'a ExerciseDefinition> {
    catalog
        .iter()
        .filter(|e| e.muscle_group.name().eq_ignore_ascii_case(name))
        .collect()
}
